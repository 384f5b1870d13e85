//! Fixed content the question generator draws from.

use crate::question::Difficulty;

pub struct VocabEntry {
    pub word: &'static str,
    pub definition: &'static str,
    pub distractors: &'static [&'static str],
}

pub struct SentenceTemplate {
    /// Sentence with `___` marking the blank.
    pub text: &'static str,
    pub answer: &'static str,
    pub distractors: &'static [&'static str],
}

pub struct PassageQuestion {
    pub question: &'static str,
    pub answer: &'static str,
    pub distractors: &'static [&'static str],
}

pub struct Passage {
    pub title: &'static str,
    pub text: &'static str,
    pub difficulty: Option<Difficulty>,
    pub questions: &'static [PassageQuestion],
}

pub const BLANK: &str = "___";

pub static VOCABULARY: &[VocabEntry] = &[
    VocabEntry {
        word: "flyktig",
        definition: "snabbt övergående",
        distractors: &["flygande", "noggrann", "undanglidande", "varaktig"],
    },
    VocabEntry {
        word: "förlikning",
        definition: "överenskommelse efter tvist",
        distractors: &["jämförelse", "förlängning", "förolämpning", "uppgörelse i förväg"],
    },
    VocabEntry {
        word: "bedräglig",
        definition: "vilseledande",
        distractors: &["bedrövlig", "tillförlitlig", "bekymrad", "besvärlig"],
    },
    VocabEntry {
        word: "ambivalent",
        definition: "kluven i sin inställning",
        distractors: &["ambitiös", "likgiltig", "bestämd", "tvetydig i sin betydelse"],
    },
    VocabEntry {
        word: "obstinat",
        definition: "envis",
        distractors: &["oanständig", "oklar", "medgörlig", "överdriven"],
    },
    VocabEntry {
        word: "frekvent",
        definition: "ofta förekommande",
        distractors: &["sällsynt", "fräck", "tidsbestämd", "snabb"],
    },
    VocabEntry {
        word: "prekär",
        definition: "besvärlig och osäker",
        distractors: &["förhastad", "exakt", "förebyggande", "stabil"],
    },
    VocabEntry {
        word: "eftergiven",
        definition: "överseende",
        distractors: &["efterlängtad", "försenad", "sträng", "uppgiven"],
    },
    VocabEntry {
        word: "konsensus",
        definition: "allmän enighet",
        distractors: &["sammanfattning", "medvetenhet", "omröstning", "motsättning"],
    },
    VocabEntry {
        word: "tvetydig",
        definition: "som kan tolkas på flera sätt",
        distractors: &["tvivelaktig", "tydlig", "dubbelsidig", "förvirrad"],
    },
    VocabEntry {
        word: "försumma",
        definition: "underlåta att sköta",
        distractors: &["försvåra", "sammanfatta", "förhindra", "glömma bort helt"],
    },
    VocabEntry {
        word: "lojal",
        definition: "trogen",
        distractors: &["lagenlig", "lokal", "likgiltig", "avvaktande"],
    },
    VocabEntry {
        word: "utopisk",
        definition: "orealistiskt idealisk",
        distractors: &["utförlig", "föråldrad", "genomförbar", "pessimistisk"],
    },
    VocabEntry {
        word: "sporadisk",
        definition: "som förekommer då och då",
        distractors: &["sportslig", "regelbunden", "plötslig", "spridd över stor yta"],
    },
    VocabEntry {
        word: "implicit",
        definition: "underförstådd",
        distractors: &["uttalad", "inblandad", "ofullständig", "invecklad"],
    },
    VocabEntry {
        word: "rigid",
        definition: "stel och oböjlig",
        distractors: &["riklig", "noggrann", "följsam", "kraftfull"],
    },
    VocabEntry {
        word: "anspråkslös",
        definition: "blygsam",
        distractors: &["krävande", "anspänd", "oförskämd", "anonym"],
    },
    VocabEntry {
        word: "initiera",
        definition: "sätta igång",
        distractors: &["invända", "avsluta", "informera", "godkänna"],
    },
    VocabEntry {
        word: "vedertagen",
        definition: "allmänt accepterad",
        distractors: &["ifrågasatt", "vederhäftig", "nyligen införd", "omtvistad"],
    },
    VocabEntry {
        word: "negligera",
        definition: "bortse från",
        distractors: &["förneka", "förhandla", "förstora", "uppmärksamma"],
    },
    VocabEntry {
        word: "lakonisk",
        definition: "kort och koncis",
        distractors: &["långrandig", "lättsinnig", "sorgsen", "vardaglig"],
    },
    VocabEntry {
        word: "pragmatisk",
        definition: "praktiskt inriktad",
        distractors: &["principfast", "pratsam", "teoretisk", "pedantisk"],
    },
    VocabEntry {
        word: "rekapitulera",
        definition: "sammanfatta",
        distractors: &["återkalla", "kapitulera", "rekommendera", "upprepa ordagrant"],
    },
    VocabEntry {
        word: "skarpsinnig",
        definition: "intelligent och klarsynt",
        distractors: &["skarptungad", "misstänksam", "tankspridd", "vass i tonen"],
    },
];

pub static SENTENCES: &[SentenceTemplate] = &[
    SentenceTemplate {
        text: "Trots att utredningen var omfattande kunde den inte ___ frågan om vem som bar ansvaret.",
        answer: "besvara",
        distractors: &["förutse", "försvåra", "undvika", "beskriva"],
    },
    SentenceTemplate {
        text: "Forskarna var ___ i sina slutsatser eftersom underlaget fortfarande var begränsat.",
        answer: "försiktiga",
        distractors: &["tvärsäkra", "oeniga", "förhastade", "entusiastiska"],
    },
    SentenceTemplate {
        text: "Den nya lagen fick stor ___ i praktiken, trots att den först hade mötts av kritik.",
        answer: "genomslagskraft",
        distractors: &["motvilja", "eftergivenhet", "förvirring", "likgiltighet"],
    },
    SentenceTemplate {
        text: "Hon ansåg att beslutet var ___ och krävde därför att det skulle omprövas.",
        answer: "förhastat",
        distractors: &["genomtänkt", "välgrundat", "oundvikligt", "efterlängtat"],
    },
    SentenceTemplate {
        text: "Eftersom resultaten var ___ kunde man inte dra några säkra slutsatser.",
        answer: "motstridiga",
        distractors: &["entydiga", "samstämmiga", "övertygande", "fullständiga"],
    },
    SentenceTemplate {
        text: "Bolaget valde att ___ sin verksamhet till fler marknader under det kommande året.",
        answer: "utvidga",
        distractors: &["avveckla", "begränsa", "omvärdera", "försumma"],
    },
    SentenceTemplate {
        text: "Kritiken var visserligen hård, men den var också ___ och gav författaren mycket att arbeta med.",
        answer: "konstruktiv",
        distractors: &["destruktiv", "ogrundad", "överdriven", "personlig"],
    },
    SentenceTemplate {
        text: "Med tiden blev det alltmer ___ att projektet inte skulle bli klart i tid.",
        answer: "uppenbart",
        distractors: &["osannolikt", "tveksamt", "likgiltigt", "förvånande"],
    },
    SentenceTemplate {
        text: "Debattören försökte ___ motståndarens argument genom att peka på brister i statistiken.",
        answer: "underminera",
        distractors: &["understödja", "bekräfta", "sammanfatta", "upprepa"],
    },
    SentenceTemplate {
        text: "Det var ett ___ beslut som fattades utan att någon hade tillfrågats.",
        answer: "egenmäktigt",
        distractors: &["demokratiskt", "väl förankrat", "gemensamt", "efterlängtat"],
    },
    SentenceTemplate {
        text: "Romanens slut är medvetet ___ och lämnar åt läsaren att avgöra vad som egentligen hände.",
        answer: "öppet",
        distractors: &["förutsägbart", "sentimentalt", "avslutat", "humoristiskt"],
    },
    SentenceTemplate {
        text: "För att undvika missförstånd bör instruktionerna formuleras så ___ som möjligt.",
        answer: "entydigt",
        distractors: &["omständligt", "vagt", "poetiskt", "utförligt"],
    },
];

pub static PASSAGES: &[Passage] = &[
    Passage {
        title: "Stadsträd och klimat",
        text: "Träd i städer har länge setts som en estetisk tillgång, men på senare år har deras \
               betydelse för stadens klimat fått allt större uppmärksamhet. Ett stort träd kan genom \
               avdunstning och skugga sänka temperaturen i sin omedelbara närhet med flera grader en \
               varm sommardag. Samtidigt binder trädens rötter vatten vid kraftiga skyfall, vilket \
               minskar belastningen på dagvattensystemen. Trots detta fälls varje år många äldre träd \
               vid nybyggnation, ofta med hänvisning till att nya träd planteras i deras ställe. Unga \
               träd behöver dock flera decennier innan de ger samma effekt som de träd de ersätter.",
        difficulty: Some(Difficulty::Easy),
        questions: &[
            PassageQuestion {
                question: "Vilken funktion hos stadsträd nämns i texten?",
                answer: "De minskar belastningen på dagvattensystemen.",
                distractors: &[
                    "De höjer luftfuktigheten inomhus.",
                    "De sänker bullernivån i bostadsområden.",
                    "De ökar fastighetsvärdena i centrum.",
                ],
            },
            PassageQuestion {
                question: "Vad är textens invändning mot att ersätta äldre träd med nya?",
                answer: "Nya träd tar lång tid innan de gör samma nytta.",
                distractors: &[
                    "Nya träd är dyrare att plantera.",
                    "Nya träd kräver mer vatten.",
                    "Nya träd är mindre estetiskt tilltalande.",
                ],
            },
        ],
    },
    Passage {
        title: "Språkets förändring",
        text: "Det är vanligt att språkförändringar möts av oro. Nya ord och uttryck uppfattas ofta \
               som tecken på förfall, särskilt när de lånas in från andra språk. Språkhistorien visar \
               emellertid att svenskan i alla tider har tagit upp ord utifrån, från latin och \
               lågtyska till franska och engelska, utan att därmed förlora sin egenart. Många ord som \
               i dag betraktas som genuint svenska var en gång nya lån som väckte samma farhågor. \
               Språkvetare brukar därför betona att förändring är ett normaltillstånd snarare än ett \
               hot, även om de samtidigt kan se skäl att värna svenskan inom vissa domäner.",
        difficulty: Some(Difficulty::Medium),
        questions: &[
            PassageQuestion {
                question: "Vilken slutsats drar språkvetarna enligt texten?",
                answer: "Att förändring är ett normalt tillstånd för ett språk.",
                distractors: &[
                    "Att lånord bör ersättas med svenska ord.",
                    "Att svenskan håller på att förlora sin egenart.",
                    "Att engelskan påverkar svenskan mer än latinet gjorde.",
                ],
            },
            PassageQuestion {
                question: "Vad menar texten om ord som i dag räknas som svenska?",
                answer: "En del av dem var en gång lånord som väckte oro.",
                distractors: &[
                    "De har alltid funnits i svenskan.",
                    "De har ersatt de flesta lånord.",
                    "De används mindre i dag än tidigare.",
                ],
            },
            PassageQuestion {
                question: "Vilken hållning till svenskans framtid uttrycks i textens sista mening?",
                answer: "En nyanserad hållning där förändring accepteras men vissa domäner värnas.",
                distractors: &[
                    "En helt avvisande hållning till lånord.",
                    "En likgiltig hållning till språkfrågor.",
                    "En övertygelse om att svenskan snart försvinner.",
                ],
            },
        ],
    },
    Passage {
        title: "Sömn och minne",
        text: "Under sömnen bearbetar hjärnan det som har inträffat under dagen. Forskning har visat \
               att försökspersoner som sover efter att ha lärt sig en uppgift presterar bättre vid ett \
               senare test än de som hålls vakna lika länge. En förklaring är att minnen under djupsömn \
               förs över från hippocampus till hjärnbarken, där de lagras mer varaktigt. Effekten \
               tycks dock vara olika stark för olika typer av minnen. Motoriska färdigheter gynnas \
               främst av lätt sömn, medan faktakunskaper framför allt förstärks under djupsömn. \
               Resultaten har lett till att vissa forskare ifrågasätter nyttan av att plugga sent \
               kvällen före ett prov.",
        difficulty: Some(Difficulty::Hard),
        questions: &[
            PassageQuestion {
                question: "Vilket påstående stöds av texten?",
                answer: "Olika typer av minnen förstärks under olika sömnstadier.",
                distractors: &[
                    "Alla minnen förstärks lika mycket under djupsömn.",
                    "Motoriska färdigheter gynnas främst av djupsömn.",
                    "Hippocampus lagrar minnen mer varaktigt än hjärnbarken.",
                ],
            },
            PassageQuestion {
                question: "Varför ifrågasätter vissa forskare sena pluggkvällar?",
                answer: "Eftersom sömnen behövs för att befästa det man har lärt sig.",
                distractors: &[
                    "Eftersom trötthet gör det omöjligt att lära sig nytt.",
                    "Eftersom faktakunskaper glöms bort under natten.",
                    "Eftersom djupsömn försvagar nyinlärda minnen.",
                ],
            },
        ],
    },
    Passage {
        title: "Kooperativens historia",
        text: "De svenska konsumentkooperativen växte fram under slutet av 1800-talet som ett svar på \
               höga priser och dålig varukvalitet. Genom att gå samman kunde medlemmarna köpa in \
               varor gemensamt och dela på överskottet. Rörelsen hade tydliga folkbildande ambitioner: \
               medlemmarna skulle inte bara få billigare varor utan också lära sig att ta ansvar för \
               en gemensam verksamhet. Under 1900-talets första hälft blev kooperationen en av landets \
               största aktörer inom handeln. I takt med att privata kedjor växte minskade dock \
               skillnaderna mellan kooperativa och privata butiker, och medlemskapet kom för många att \
               handla mer om rabatter än om delaktighet.",
        difficulty: None,
        questions: &[
            PassageQuestion {
                question: "Vad var enligt texten en av rörelsens ursprungliga ambitioner?",
                answer: "Att medlemmarna skulle lära sig ta ansvar för en gemensam verksamhet.",
                distractors: &[
                    "Att konkurrera ut alla privata butiker.",
                    "Att sänka lönerna inom handeln.",
                    "Att exportera svenska varor.",
                ],
            },
            PassageQuestion {
                question: "Hur beskriver texten utvecklingen under senare tid?",
                answer: "Medlemskapet har för många blivit en fråga om rabatter.",
                distractors: &[
                    "Kooperativen har blivit helt statliga.",
                    "Medlemmarnas inflytande har ökat kraftigt.",
                    "Privata kedjor har slutat växa.",
                ],
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentences_have_one_blank() {
        for s in SENTENCES {
            assert_eq!(s.text.matches(BLANK).count(), 1, "{}", s.text);
        }
    }

    #[test]
    fn distractors_differ_from_answers() {
        for v in VOCABULARY {
            assert!(!v.distractors.contains(&v.definition), "{}", v.word);
            assert!(v.distractors.len() >= 3, "{}", v.word);
        }
        for s in SENTENCES {
            assert!(!s.distractors.contains(&s.answer), "{}", s.text);
        }
        for p in PASSAGES {
            for q in p.questions {
                assert!(!q.distractors.contains(&q.answer), "{}", q.question);
            }
        }
    }

    #[test]
    fn passages_have_questions() {
        assert!(!PASSAGES.is_empty());

        for p in PASSAGES {
            assert!(!p.questions.is_empty(), "{}", p.title);
            assert!(!p.text.is_empty(), "{}", p.title);
        }
    }

    #[test]
    fn distractors_are_distinct() {
        let pools = VOCABULARY
            .iter()
            .map(|v| v.distractors)
            .chain(SENTENCES.iter().map(|s| s.distractors))
            .chain(PASSAGES.iter().flat_map(|p| p.questions.iter().map(|q| q.distractors)));

        for pool in pools {
            for (i, d) in pool.iter().enumerate() {
                assert!(!pool[i + 1..].contains(d), "{d}");
            }
        }
    }
}
