use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub notes: String,
    pub cost: f64,
}

impl Activity {
    pub fn has_notes(&self) -> bool {
        !self.notes.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewActivity {
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub notes: String,
    pub cost: f64,
}

impl NewActivity {
    pub fn into_activity(self) -> Activity {
        Activity {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            date: self.date,
            time: self.time,
            location: self.location,
            notes: self.notes,
            cost: self.cost,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityPatch {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub cost: Option<f64>,
}

impl ActivityPatch {
    pub fn apply_to(self, activity: &mut Activity) {
        if let Some(title) = self.title {
            activity.title = title;
        }
        if let Some(date) = self.date {
            activity.date = date;
        }
        if let Some(time) = self.time {
            activity.time = time;
        }
        if let Some(location) = self.location {
            activity.location = location;
        }
        if let Some(notes) = self.notes {
            activity.notes = notes;
        }
        if let Some(cost) = self.cost {
            activity.cost = cost;
        }
    }
}

impl From<NewActivity> for ActivityPatch {
    fn from(value: NewActivity) -> Self {
        Self {
            title: Some(value.title),
            date: Some(value.date),
            time: Some(value.time),
            location: Some(value.location),
            notes: Some(value.notes),
            cost: Some(value.cost),
        }
    }
}
