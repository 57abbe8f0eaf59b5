//! Static quiz question bank.
//!
//! # Invariants
//! - Every question's `correct_answer` indexes into its `options`.
//! - Quiz ids are unique kebab-case strings.

use serde::Serialize;

/// Quiz used when a caller asks for an unknown id.
pub const DEFAULT_QUIZ_ID: &str = "atomic-structure-basic";

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: &'static [&'static str],
    /// Index into `options`.
    pub correct_answer: usize,
    pub hint: Option<&'static str>,
}

/// A named, ordered question list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizDefinition {
    pub id: &'static str,
    pub questions: &'static [QuizQuestion],
}

pub static QUIZ_BANK: &[QuizDefinition] = &[
    QuizDefinition {
        id: "atomic-structure-basic",
        questions: &[
            QuizQuestion {
                question: "What is the smallest unit of matter?",
                options: &["Atom", "Molecule", "Proton", "Electron"],
                correct_answer: 0,
                hint: Some("It's the building block of everything."),
            },
            QuizQuestion {
                question: "Which particle has a negative charge?",
                options: &["Proton", "Neutron", "Electron", "Nucleus"],
                correct_answer: 2,
                hint: Some("It orbits around the nucleus."),
            },
            QuizQuestion {
                question: "Where are protons located?",
                options: &["Nucleus", "Electron cloud", "Outside the atom", "Orbitals"],
                correct_answer: 0,
                hint: Some("It's at the atom's center."),
            },
        ],
    },
    QuizDefinition {
        id: "periodic-table",
        questions: &[
            QuizQuestion {
                question: "Which element has the symbol 'O'?",
                options: &["Gold", "Oxygen", "Osmium", "Oxide"],
                correct_answer: 1,
                hint: Some("We breathe it every second."),
            },
            QuizQuestion {
                question: "How many groups are in the modern periodic table?",
                options: &["7", "18", "12", "20"],
                correct_answer: 1,
                hint: Some("It's greater than 15."),
            },
            QuizQuestion {
                question: "Which element is in Group 1 (Alkali metals)?",
                options: &["Helium", "Sodium", "Calcium", "Carbon"],
                correct_answer: 1,
                hint: Some("Found in table salt."),
            },
        ],
    },
    QuizDefinition {
        id: "element-properties",
        questions: &[
            QuizQuestion {
                question: "What defines an element?",
                options: &[
                    "Number of neutrons",
                    "Number of protons",
                    "Number of electrons",
                    "Mass number",
                ],
                correct_answer: 1,
                hint: Some("It's also called atomic number."),
            },
            QuizQuestion {
                question: "Which is a noble gas?",
                options: &["Nitrogen", "Oxygen", "Helium", "Chlorine"],
                correct_answer: 2,
                hint: Some("Very stable, used in balloons."),
            },
        ],
    },
    QuizDefinition {
        id: "ions-isotopes",
        questions: &[
            QuizQuestion {
                question: "What is an ion?",
                options: &[
                    "An atom with extra or missing protons",
                    "An atom with extra or missing neutrons",
                    "An atom with extra or missing electrons",
                    "An atom with a different mass number",
                ],
                correct_answer: 2,
                hint: Some("It relates to electrical charge."),
            },
            QuizQuestion {
                question: "Isotopes of an element differ in?",
                options: &["Protons", "Electrons", "Neutrons", "Charge"],
                correct_answer: 2,
                hint: Some("They have the same protons, different ...?"),
            },
        ],
    },
    QuizDefinition {
        id: "electron-config",
        questions: &[
            QuizQuestion {
                question: "How many electrons can the first shell hold?",
                options: &["2", "8", "18", "32"],
                correct_answer: 0,
                hint: Some("It's the smallest shell."),
            },
            QuizQuestion {
                question: "What is the electron configuration of Hydrogen?",
                options: &["1s1", "1s2", "2s1", "2p1"],
                correct_answer: 0,
                hint: Some("It has only one electron."),
            },
        ],
    },
];

/// Returns the questions for `quiz_id`, or `None` for unknown ids.
pub fn quiz_questions(quiz_id: &str) -> Option<&'static [QuizQuestion]> {
    QUIZ_BANK
        .iter()
        .find(|quiz| quiz.id == quiz_id)
        .map(|quiz| quiz.questions)
}

/// Returns every quiz id in bank order.
pub fn quiz_ids() -> impl Iterator<Item = &'static str> {
    QUIZ_BANK.iter().map(|quiz| quiz.id)
}

#[cfg(test)]
mod tests {
    use super::{quiz_ids, quiz_questions, DEFAULT_QUIZ_ID, QUIZ_BANK};

    #[test]
    fn correct_answers_index_into_options() {
        for quiz in QUIZ_BANK {
            assert!(!quiz.questions.is_empty(), "quiz {} is empty", quiz.id);
            for question in quiz.questions {
                assert!(question.correct_answer < question.options.len());
            }
        }
    }

    #[test]
    fn default_quiz_exists_and_ids_are_unique() {
        assert!(quiz_questions(DEFAULT_QUIZ_ID).is_some());
        assert!(quiz_questions("missing").is_none());

        let mut ids = quiz_ids().collect::<Vec<_>>();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
