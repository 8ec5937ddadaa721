//! The general multi-condition questionnaire: five sections walked in order,
//! scored into one value per condition.

use std::sync::LazyLock;

use serde::Serialize;
use ts_rs::TS;

use crate::QuestionBank;
use crate::question::{Question, by, flat};

/// The "none of the above" label of the general questionnaire's
/// multi-select questions.
pub const NONE_OPTION: &str = "Nee";

/// A named group of questions. Sections are traversed strictly in order.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Section {
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

/// The general questionnaire.
pub struct GeneralQuestionnaire;

impl GeneralQuestionnaire {
    pub fn sections(&self) -> &[Section] {
        &SECTIONS
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections().get(index)
    }
}

impl QuestionBank for GeneralQuestionnaire {
    fn pages(&self) -> Vec<&[Question]> {
        self.sections().iter().map(|s| s.questions.as_slice()).collect()
    }
}

fn section(title: &str, description: &str, questions: Vec<Question>) -> Section {
    Section {
        title: title.to_string(),
        description: description.to_string(),
        questions,
    }
}

static SECTIONS: LazyLock<Vec<Section>> = LazyLock::new(|| {
    vec![
        section(
            "Algemene Informatie",
            "Basis informatie over uw gezondheid",
            general_information(),
        ),
        section(
            "Symptoom Karakterisering",
            "Beschrijf uw hoofdklachten",
            symptom_characterisation(),
        ),
        section(
            "Specifieke Aandoening Screening",
            "Gerichte vragen per aandoening",
            condition_screening(),
        ),
        section(
            "Red Flags & Comorbiditeiten",
            "Alarmsymptomen en bijkomende klachten",
            red_flags(),
        ),
        section(
            "Lifestyle & Voeding",
            "Leefstijl en voedingspatroon",
            lifestyle(),
        ),
    ]
});

fn general_information() -> Vec<Question> {
    vec![
        Question::single(
            1,
            "Wat is uw leeftijd?",
            vec![
                ("<18", flat(0)),
                ("18-30", flat(1)),
                ("31-45", flat(2)),
                ("46-60", flat(3)),
                (">60", flat(4)),
            ],
        ),
        Question::single(
            2,
            "Hoe lang heeft u al klachten?",
            vec![
                ("<1 maand", flat(1)),
                ("1-3 maanden", flat(2)),
                ("3-6 maanden", flat(3)),
                ("6-12 maanden", flat(4)),
                (">1 jaar", flat(5)),
            ],
        ),
        Question::multi(
            3,
            "Heeft u eerder een diagnose gekregen voor uw buikklachten? (meerdere antwoorden mogelijk)",
            vec![
                ("Nee", flat(0)),
                ("IBS (prikkelbare darm)", flat(1)),
                ("Gastritis (maagontsteking)", flat(2)),
                ("Reflux (zuurbranden)", flat(1)),
                ("Lactose intolerantie", flat(1)),
                ("Andere", flat(1)),
            ],
        )
        .with_exclusive_option(NONE_OPTION),
        Question::multi(
            4,
            "Gebruikt u momenteel medicijnen voor uw buikklachten? (meerdere antwoorden mogelijk)",
            vec![
                ("Nee", flat(0)),
                ("Maagzuurremmers (Omeprazol, Pantoprazol, Nexium)", flat(2)),
                ("Pijnstillers (Ibuprofen, Naproxen, Diclofenac)", flat(3)),
                ("Antibiotica", flat(2)),
                ("Probiotica (Yakult, Activia, VSL#3)", flat(1)),
                ("Voedingssuplementen (Vitamines, Mineralen)", flat(0)),
                ("Andere medicijnen", flat(1)),
            ],
        )
        .with_exclusive_option(NONE_OPTION),
        Question::multi(
            5,
            "Heeft iemand in uw familie vergelijkbare buikklachten of darmaandoeningen? (meerdere antwoorden mogelijk)",
            vec![
                ("Nee", flat(0)),
                ("IBS (prikkelbare darm)", flat(2)),
                ("Coeliakie (glutenintolerantie)", flat(3)),
                ("Crohn/Colitis ulcerosa", flat(4)),
                ("Darmkanker", flat(3)),
                ("Onbekend", flat(1)),
            ],
        )
        .with_exclusive_option(NONE_OPTION),
    ]
}

fn symptom_characterisation() -> Vec<Question> {
    vec![
        Question::single(
            6,
            "Waar heeft u het meest last van buikpijn?",
            vec![
                ("Geen buikpijn", flat(0)),
                ("Bovenbuik midden", by(&[("dyspepsia", 3), ("gastritis", 3)])),
                ("Bovenbuik rechts", by(&[("gastritis", 2)])),
                ("Onderbuik links", by(&[("ibs", 3), ("ibd", 2)])),
                ("Onderbuik rechts", by(&[("ibs", 2)])),
                ("Hele buik", by(&[("ibs", 2), ("sibo", 2)])),
            ],
        ),
        Question::single(
            7,
            "Hoe vaak heeft u buikpijn?",
            vec![
                ("Zelden", flat(1)),
                ("1-2 dagen/week", flat(2)),
                ("3-4 dagen/week", flat(3)),
                ("5-6 dagen/week", flat(4)),
                ("Dagelijks", flat(5)),
            ],
        ),
        Question::single(
            8,
            "Hoe vaak heeft u ontlasting?",
            vec![
                ("<3x per week", by(&[("ibs", 4)])),
                ("3-6x per week", by(&[("ibs", 2)])),
                ("1x per dag", flat(0)),
                ("2-3x per dag", by(&[("ibs", 2), ("sibo", 2)])),
                (">3x per dag", by(&[("ibs", 4), ("ibd", 3), ("sibo", 3)])),
            ],
        ),
        Question::single(
            9,
            "Hoe is de consistentie van uw ontlasting meestal?",
            vec![
                ("Hard/keutels", by(&[("ibs", 4)])),
                ("Normaal gevormd", flat(0)),
                ("Zacht", by(&[("ibs", 2)])),
                ("Waterig", by(&[("ibs", 4), ("ibd", 3), ("sibo", 3)])),
                ("Wisselend hard/zacht", by(&[("ibs", 4), ("sibo", 2)])),
            ],
        ),
        Question::single(
            10,
            "Ziet u wel eens bloed in uw ontlasting?",
            vec![
                ("Nooit", flat(0)),
                ("Zelden (helder rood)", flat(2)),
                ("Soms (donker)", by(&[("ibd", 4)])),
                ("Regelmatig", by(&[("ibd", 5)])),
                ("Vaak", by(&[("ibd", 5)])),
            ],
        ),
        Question::single(
            11,
            "Heeft u last van winderigheid/opgeblazen gevoel?",
            vec![
                ("Nooit", flat(0)),
                ("Zelden", flat(1)),
                ("Soms", flat(2)),
                ("Vaak", by(&[("ibs", 3), ("sibo", 4), ("lactose", 3)])),
                ("Altijd", by(&[("sibo", 5), ("ibs", 4)])),
            ],
        ),
        Question::single(
            12,
            "Heeft u wel eens misselijkheid of braken?",
            vec![
                ("Nooit", flat(0)),
                ("Zelden", flat(1)),
                ("Bij bepaald eten", flat(3)),
                ("Regelmatig", by(&[("gastritis", 3), ("dyspepsia", 2)])),
                ("Vaak", by(&[("gastritis", 4)])),
            ],
        ),
        Question::single(
            13,
            "Bent u ongewild afgevallen (>5kg)?",
            vec![
                ("Nee", flat(0)),
                ("1-3kg", flat(1)),
                ("3-5kg", by(&[("ibd", 2), ("celiac", 2)])),
                ("5-10kg", by(&[("ibd", 4), ("celiac", 4)])),
                (">10kg", by(&[("ibd", 5)])),
            ],
        ),
        Question::single(
            14,
            "Merkt u een relatie tussen uw klachten en eten?",
            vec![
                ("Geen relatie", flat(0)),
                ("Erger na eten", by(&[("dyspepsia", 3), ("sibo", 4)])),
                ("Beter na eten", by(&[("gastritis", 2)])),
                (
                    "Specifieke voedingsmiddelen (bv. zuivel, gluten, knoflook)",
                    by(&[("ibs", 3)]),
                ),
                ("Altijd na eten", by(&[("sibo", 5), ("dyspepsia", 4)])),
            ],
        ),
        Question::single(
            15,
            "Merkt u een relatie tussen stress en uw klachten?",
            vec![
                ("Geen relatie", flat(0)),
                ("Iets erger bij stress", by(&[("ibs", 2)])),
                ("Duidelijk erger bij stress", by(&[("ibs", 4)])),
                ("Alleen bij stress", by(&[("ibs", 5)])),
                ("Stress maakt alles erger", by(&[("ibs", 4), ("dyspepsia", 2)])),
            ],
        ),
    ]
}

fn condition_screening() -> Vec<Question> {
    vec![
        Question::single(
            21,
            "Heeft u vaak het gevoel dat uw ontlasting niet volledig is?",
            vec![
                ("Nooit", flat(0)),
                ("Zelden", flat(1)),
                ("Soms", by(&[("ibs", 2)])),
                ("Vaak", by(&[("ibs", 4)])),
                ("Altijd", by(&[("ibs", 5)])),
            ],
        ),
        Question::single(
            22,
            "Zit er wel eens slijm in uw ontlasting?",
            vec![
                ("Nooit", flat(0)),
                ("Zelden", flat(1)),
                ("Soms", by(&[("ibs", 3)])),
                ("Vaak", by(&[("ibs", 4), ("ibd", 2)])),
                ("Altijd", by(&[("ibs", 5), ("ibd", 3)])),
            ],
        ),
        Question::single(
            23,
            "Voelt uw buik extreem opgezwollen na eten (vooral 1-3 uur later)?",
            vec![
                ("Nooit", flat(0)),
                ("Zelden", flat(1)),
                ("Soms", by(&[("sibo", 2)])),
                ("Vaak", by(&[("sibo", 4)])),
                ("Altijd", by(&[("sibo", 5)])),
            ],
        ),
        Question::multi(
            24,
            "Heeft u eerder buikoperaties gehad? (meerdere antwoorden mogelijk)",
            vec![
                ("Nee", flat(0)),
                ("Blindedarm", by(&[("sibo", 2)])),
                ("Galblaas", by(&[("sibo", 2)])),
                ("Darmen", by(&[("sibo", 4)])),
                ("Maag", by(&[("sibo", 3)])),
                ("Andere operaties", by(&[("sibo", 2)])),
            ],
        )
        .with_exclusive_option(NONE_OPTION),
        Question::single(
            25,
            "Hoe lang gebruikt u al regelmatig maagzuurremmers (omeprazol, pantoprazol)?",
            vec![
                ("Nee", flat(0)),
                ("Minder dan 3 maanden", by(&[("sibo", 1)])),
                ("3-12 maanden", by(&[("sibo", 2)])),
                ("1-2 jaar", by(&[("sibo", 3)])),
                ("Meer dan 2 jaar", by(&[("sibo", 4)])),
            ],
        ),
        Question::single(
            26,
            "Heeft u chronische vermoeidheid of concentratieproblemen?",
            vec![
                ("Nee", flat(0)),
                ("Lichte vermoeidheid", by(&[("celiac", 1)])),
                ("Matige vermoeidheid", by(&[("celiac", 2), ("ibd", 1)])),
                ("Ernstige vermoeidheid", by(&[("celiac", 4), ("ibd", 2)])),
                ("Constant uitgeput", by(&[("celiac", 5), ("ibd", 3)])),
            ],
        ),
        Question::multi(
            27,
            "Heeft u tekorten gehad aan ijzer, B12 of foliumzuur?",
            vec![
                ("Nee", flat(0)),
                ("IJzer tekort", by(&[("celiac", 3), ("ibd", 2)])),
                ("B12 tekort", by(&[("celiac", 3), ("sibo", 3)])),
                ("Foliumzuur tekort", by(&[("celiac", 4)])),
                ("Geen idee", flat(0)),
            ],
        )
        .with_exclusive_option(NONE_OPTION),
        Question::single(
            28,
            "Heeft u huidproblemen (eczeem, uitslag, jeuk)?",
            vec![
                ("Nee", flat(0)),
                ("Lichte huidklachten", flat(1)),
                ("Eczeem", by(&[("celiac", 2)])),
                ("Chronische uitslag", by(&[("celiac", 3)])),
                ("Dermatitis herpetiformis", by(&[("celiac", 5)])),
            ],
        ),
        Question::multi(
            29,
            "Heeft u klachten na het eten van zuivelproducten? (meerdere antwoorden mogelijk)",
            vec![
                ("Nee", flat(0)),
                ("Soms winderigheid", by(&[("lactose", 2)])),
                ("Vaak buikpijn", by(&[("lactose", 3)])),
                ("Altijd diarree", by(&[("lactose", 4)])),
                ("Alle zuivel vermijden", by(&[("lactose", 5)])),
            ],
        )
        .with_exclusive_option(NONE_OPTION),
        Question::single(
            30,
            "Merkt u verschil als u lactasevrije producten gebruikt?",
            vec![
                ("Nooit geprobeerd", flat(0)),
                ("Geen verschil", by(&[("lactose", -1)])),
                ("Iets beter", by(&[("lactose", 2)])),
                ("Veel beter", by(&[("lactose", 4)])),
                ("Volledig klachtenvrij", by(&[("lactose", 5)])),
            ],
        ),
    ]
}

fn red_flags() -> Vec<Question> {
    vec![
        Question::single(
            31,
            "Heeft u wel eens koorts gehad samen met uw buikklachten?",
            vec![
                ("Nooit", flat(0)),
                ("Zelden", flat(1)),
                ("Soms", by(&[("ibd", 2)])),
                ("Regelmatig", by(&[("ibd", 4)])),
                ("Vaak", by(&[("ibd", 5)])),
            ],
        ),
        Question::single(
            32,
            "Zweet u 's nachts zonder duidelijke reden?",
            vec![
                ("Nooit", flat(0)),
                ("Zelden", flat(1)),
                ("Soms", by(&[("ibd", 2)])),
                ("Regelmatig", by(&[("ibd", 3)])),
                ("Altijd", by(&[("ibd", 4)])),
            ],
        ),
        Question::multi(
            33,
            "Heeft u problemen rond uw anus (scheurtjes, uitstulpingen)? (meerdere antwoorden mogelijk)",
            vec![
                ("Nee", flat(0)),
                ("Soms jeuk", flat(1)),
                ("Pijn bij ontlasting", by(&[("ibd", 2)])),
                ("Zichtbare problemen", by(&[("ibd", 4)])),
                ("Ernstige klachten", by(&[("ibd", 5)])),
            ],
        )
        .with_exclusive_option(NONE_OPTION),
        Question::single(
            34,
            "Heeft u gewrichtspijn of gewrichtszwelling?",
            vec![
                ("Nee", flat(0)),
                ("Soms stijfheid", flat(1)),
                ("Regelmatige pijn", by(&[("ibd", 2)])),
                ("Zwelling", by(&[("ibd", 3)])),
                ("Ernstige gewrichtspijn", by(&[("ibd", 4)])),
            ],
        ),
        Question::single(
            35,
            "Heeft u oogklachten (ontsteking, roodheid, pijn)?",
            vec![
                ("Nee", flat(0)),
                ("Soms droge ogen", flat(1)),
                ("Regelmatige roodheid", by(&[("ibd", 2)])),
                ("Pijnlijke ogen", by(&[("ibd", 3)])),
                ("Oogontstekingen", by(&[("ibd", 4)])),
            ],
        ),
    ]
}

fn lifestyle() -> Vec<Question> {
    vec![
        Question::single(
            36,
            "Hoe is uw algemene voedingspatroon?",
            vec![
                ("Zeer gezond", flat(0)),
                ("Redelijk gezond", flat(1)),
                ("Gemiddeld", flat(2)),
                ("Veel processed food", by(&[("ibs", 2), ("ibd", 2)])),
                ("Zeer ongezond", by(&[("ibs", 3), ("ibd", 3)])),
            ],
        ),
        Question::single(
            37,
            "Hoeveel stress ervaart u in uw dagelijks leven?",
            vec![
                ("Zeer weinig", flat(0)),
                ("Weinig", flat(1)),
                ("Gemiddeld", by(&[("ibs", 1)])),
                ("Veel", by(&[("ibs", 3), ("dyspepsia", 2)])),
                ("Extreem veel", by(&[("ibs", 5), ("dyspepsia", 3)])),
            ],
        ),
        Question::single(
            38,
            "Hoeveel beweging krijgt u per week?",
            vec![
                (">5 uur", flat(0)),
                ("3-5 uur", flat(0)),
                ("1-3 uur", flat(1)),
                ("<1 uur", by(&[("ibs", 1)])),
                ("Geen beweging", by(&[("ibs", 2)])),
            ],
        ),
        Question::single(
            39,
            "Rookt u of heeft u gerookt?",
            vec![
                ("Nooit gerookt", flat(0)),
                ("Gestopt >5 jaar", flat(0)),
                ("Gestopt <5 jaar", by(&[("ibd", 1)])),
                ("Sociale roker", by(&[("ibd", 2)])),
                ("Dagelijkse roker", by(&[("ibd", 4)])),
            ],
        ),
        Question::single(
            40,
            "Hoe vaak gebruikt u alcohol?",
            vec![
                ("Nooit", flat(0)),
                ("Zelden", flat(0)),
                ("1-2 glazen/week", flat(0)),
                ("3-7 glazen/week", by(&[("gastritis", 1)])),
                (">7 glazen/week", by(&[("gastritis", 3)])),
            ],
        ),
        Question::single(
            41,
            "Heeft u ooit een H. Pylori infectie gehad of getest?",
            vec![
                ("Nooit getest", flat(0)),
                ("Negatief getest", flat(0)),
                ("Positief getest - behandeld", by(&[("gastritis", 3)])),
                ("Positief getest - niet behandeld", by(&[("gastritis", 5)])),
                ("Onbekend", flat(1)),
            ],
        ),
        Question::single(
            42,
            "Heeft u diabetes of problemen met bloedsuiker?",
            vec![
                ("Nee", flat(0)),
                ("Pre-diabetes", by(&[("dyspepsia", 2)])),
                ("Type 1 diabetes", by(&[("dyspepsia", 3)])),
                ("Type 2 diabetes", by(&[("dyspepsia", 3)])),
                ("Gestationele diabetes", by(&[("dyspepsia", 2)])),
                ("Onbekend/niet getest", flat(1)),
            ],
        ),
        Question::single(
            43,
            "Heeft u schildklierproblemen?",
            vec![
                ("Nee", flat(0)),
                ("Onderactieve schildklier (hypothyreoïdie)", by(&[("dyspepsia", 2)])),
                ("Overactieve schildklier (hyperthyreoïdie)", by(&[("dyspepsia", 3)])),
                ("Hashimoto", by(&[("dyspepsia", 2)])),
                ("Andere schildklieraandoening", by(&[("dyspepsia", 2)])),
                ("Onbekend/niet getest", flat(1)),
            ],
        ),
        Question::multi(
            44,
            "Heeft u bekende voedselallergieën of intoleranties? (meerdere antwoorden mogelijk)",
            vec![
                ("Nee", flat(0)),
                ("Noten/pinda allergie", by(&[("ibs", 1)])),
                ("Schaal- en schelpdieren", by(&[("ibs", 1)])),
                ("Eieren", by(&[("ibs", 1)])),
                ("Soja", by(&[("ibs", 2)])),
                ("Sesam", by(&[("ibs", 1)])),
                ("Andere allergieën", by(&[("ibs", 2)])),
            ],
        )
        .with_exclusive_option(NONE_OPTION),
    ]
}
