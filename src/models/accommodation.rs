use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accommodation {
    pub id: String,
    pub name: String,
    pub address: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub price: f64,
    pub booking_confirmation: Option<String>,
}

impl Accommodation {
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    pub fn booking_confirmation_text(&self) -> &str {
        self.booking_confirmation.as_deref().unwrap_or("not booked yet")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAccommodation {
    pub name: String,
    pub address: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub price: f64,
    pub booking_confirmation: Option<String>,
}

impl NewAccommodation {
    pub fn into_accommodation(self) -> Accommodation {
        Accommodation {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            address: self.address,
            check_in: self.check_in,
            check_out: self.check_out,
            price: self.price,
            booking_confirmation: self.booking_confirmation,
        }
    }
}

/// `booking_confirmation: Some(None)` clears an existing code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccommodationPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub price: Option<f64>,
    pub booking_confirmation: Option<Option<String>>,
}

impl AccommodationPatch {
    pub fn apply_to(self, accommodation: &mut Accommodation) {
        if let Some(name) = self.name {
            accommodation.name = name;
        }
        if let Some(address) = self.address {
            accommodation.address = address;
        }
        if let Some(check_in) = self.check_in {
            accommodation.check_in = check_in;
        }
        if let Some(check_out) = self.check_out {
            accommodation.check_out = check_out;
        }
        if let Some(price) = self.price {
            accommodation.price = price;
        }
        if let Some(code) = self.booking_confirmation {
            accommodation.booking_confirmation = code;
        }
    }
}

impl From<NewAccommodation> for AccommodationPatch {
    fn from(value: NewAccommodation) -> Self {
        Self {
            name: Some(value.name),
            address: Some(value.address),
            check_in: Some(value.check_in),
            check_out: Some(value.check_out),
            price: Some(value.price),
            booking_confirmation: Some(value.booking_confirmation),
        }
    }
}
