use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// A symptom tracked in the daily diary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Symptom {
    AbdominalPain,
    Bloating,
    Gas,
    Nausea,
    Diarrhea,
    Constipation,
    Fatigue,
}

impl Symptom {
    pub const ALL: [Symptom; 7] = [
        Symptom::AbdominalPain,
        Symptom::Bloating,
        Symptom::Gas,
        Symptom::Nausea,
        Symptom::Diarrhea,
        Symptom::Constipation,
        Symptom::Fatigue,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Symptom::AbdominalPain => "Buikpijn",
            Symptom::Bloating => "Opgeblazen gevoel",
            Symptom::Gas => "Winderigheid",
            Symptom::Nausea => "Misselijkheid",
            Symptom::Diarrhea => "Diarree",
            Symptom::Constipation => "Constipatie",
            Symptom::Fatigue => "Vermoeidheid",
        }
    }
}

/// Highest rating on the 0–5 symptom scale.
pub const MAX_SYMPTOM_RATING: u8 = 5;

/// Severity ratings for one day, each on a 0–5 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomRatings {
    #[serde(rename = "abdominalpain")]
    pub abdominal_pain: u8,
    pub bloating: u8,
    pub gas: u8,
    pub nausea: u8,
    pub diarrhea: u8,
    pub constipation: u8,
    pub fatigue: u8,
}

impl SymptomRatings {
    pub fn get(&self, symptom: Symptom) -> u8 {
        match symptom {
            Symptom::AbdominalPain => self.abdominal_pain,
            Symptom::Bloating => self.bloating,
            Symptom::Gas => self.gas,
            Symptom::Nausea => self.nausea,
            Symptom::Diarrhea => self.diarrhea,
            Symptom::Constipation => self.constipation,
            Symptom::Fatigue => self.fatigue,
        }
    }

    pub fn set(&mut self, symptom: Symptom, rating: u8) {
        let slot = match symptom {
            Symptom::AbdominalPain => &mut self.abdominal_pain,
            Symptom::Bloating => &mut self.bloating,
            Symptom::Gas => &mut self.gas,
            Symptom::Nausea => &mut self.nausea,
            Symptom::Diarrhea => &mut self.diarrhea,
            Symptom::Constipation => &mut self.constipation,
            Symptom::Fatigue => &mut self.fatigue,
        };
        *slot = rating;
    }

    /// Mean rating across all seven symptoms.
    pub fn mean(&self) -> f64 {
        let total: u32 = Symptom::ALL.iter().map(|s| u32::from(self.get(*s))).sum();
        f64::from(total) / Symptom::ALL.len() as f64
    }
}

/// One day's entry in the symptom diary. At most one entry exists per date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DiaryEntry {
    pub id: Uuid,
    pub date: jiff::civil::Date,
    pub timestamp: jiff::Timestamp,
    pub symptoms: SymptomRatings,
    /// Bristol stool scale, 1–7.
    pub stool_type: u8,
    /// Bowel movements per day, 0–10.
    pub stool_frequency: u8,
    pub foods: Vec<String>,
    /// 1–5.
    pub mood: u8,
    /// 1–5.
    pub stress: u8,
    /// Hours, 0–24 in half-hour steps.
    pub sleep: f64,
    pub notes: String,
}

impl DiaryEntry {
    /// A blank entry for `date` with the diary form's defaults.
    pub fn new(date: jiff::civil::Date, timestamp: jiff::Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            timestamp,
            symptoms: SymptomRatings::default(),
            stool_type: 4,
            stool_frequency: 1,
            foods: Vec::new(),
            mood: 3,
            stress: 3,
            sleep: 8.0,
            notes: String::new(),
        }
    }

    /// Add a food, trimmed. Blank and duplicate foods are ignored.
    /// Returns whether the food was added.
    pub fn add_food(&mut self, food: &str) -> bool {
        let food = food.trim();
        if food.is_empty() || self.foods.iter().any(|f| f == food) {
            return false;
        }
        self.foods.push(food.to_string());
        true
    }

    pub fn remove_food(&mut self, index: usize) -> Option<String> {
        (index < self.foods.len()).then(|| self.foods.remove(index))
    }

    /// Check every field against the ranges the diary form allows.
    pub fn validate(&self) -> Result<(), CoreError> {
        for symptom in Symptom::ALL {
            check_range("symptom rating", self.symptoms.get(symptom), 0, MAX_SYMPTOM_RATING)?;
        }
        check_range("stool type", self.stool_type, 1, 7)?;
        check_range("stool frequency", self.stool_frequency, 0, 10)?;
        check_range("mood", self.mood, 1, 5)?;
        check_range("stress", self.stress, 1, 5)?;

        if !(0.0..=24.0).contains(&self.sleep) {
            return Err(CoreError::OutOfRange {
                field: "sleep",
                value: self.sleep,
                min: 0.0,
                max: 24.0,
            });
        }
        if (self.sleep * 2.0).fract() != 0.0 {
            return Err(CoreError::InvalidValue {
                field: "sleep",
                reason: format!("{} is not a multiple of half an hour", self.sleep),
            });
        }
        if self.foods.iter().any(|f| f.trim().is_empty()) {
            return Err(CoreError::InvalidValue {
                field: "foods",
                reason: "blank food entry".to_string(),
            });
        }
        Ok(())
    }
}

fn check_range(field: &'static str, value: u8, min: u8, max: u8) -> Result<(), CoreError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::OutOfRange {
            field,
            value: f64::from(value),
            min: f64::from(min),
            max: f64::from(max),
        })
    }
}
