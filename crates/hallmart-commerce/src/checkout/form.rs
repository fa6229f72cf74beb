//! Checkout form types: delivery location, payment method, and the form
//! itself.

use crate::catalog::Account;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The roster entry that means "deliver off campus"; everything else on the
/// roster is a hall of residence.
pub const OFF_CAMPUS_SENTINEL: &str = "Outside School (Off-Campus)";

/// A hall of residence at the University of Ibadan.
///
/// The roster is fixed; hall names travel on the wire as their exact display
/// strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hall {
    Independence,
    NnamdiAzikwe,
    SultanBello,
    Kuti,
    Mellanby,
    LordTedder,
    QueensElizabeth,
    QueenIdia,
    Awolowo,
    Ith,
    Talent,
    AlexanderBrown,
    TafawaBalewa,
    AbubakarAbdusalami,
    OgunsheyePg,
    AlumniPg,
    InternationalPg,
    StAnnes,
}

impl Hall {
    /// Every hall, in roster order.
    pub const ALL: [Hall; 18] = [
        Hall::Independence,
        Hall::NnamdiAzikwe,
        Hall::SultanBello,
        Hall::Kuti,
        Hall::Mellanby,
        Hall::LordTedder,
        Hall::QueensElizabeth,
        Hall::QueenIdia,
        Hall::Awolowo,
        Hall::Ith,
        Hall::Talent,
        Hall::AlexanderBrown,
        Hall::TafawaBalewa,
        Hall::AbubakarAbdusalami,
        Hall::OgunsheyePg,
        Hall::AlumniPg,
        Hall::InternationalPg,
        Hall::StAnnes,
    ];

    /// The hall's display name, exactly as it appears on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Hall::Independence => "Independence Hall",
            Hall::NnamdiAzikwe => "Nnamdi Azikwe Hall",
            Hall::SultanBello => "Sultan Bello Hall",
            Hall::Kuti => "Kuti Hall",
            Hall::Mellanby => "Mellanby Hall",
            Hall::LordTedder => "Lord Tedder Hall",
            Hall::QueensElizabeth => "Queens Elizabeth Hall",
            Hall::QueenIdia => "Queen Idia Hall",
            Hall::Awolowo => "Awolowo Hall",
            Hall::Ith => "I.T.H Hall",
            Hall::Talent => "Talent Hall",
            Hall::AlexanderBrown => "Alexander Brown Hall",
            Hall::TafawaBalewa => "Tafawa Balewa Hall",
            Hall::AbubakarAbdusalami => "Abubakar Abdusalami Hall",
            Hall::OgunsheyePg => "Ogunsheye P.G Hall",
            Hall::AlumniPg => "Alumni P.G Hall",
            Hall::InternationalPg => "International P.G Hall",
            Hall::StAnnes => "St. Anne's Private Hostel",
        }
    }

    /// Look a hall up by its exact display name.
    pub fn from_name(name: &str) -> Option<Hall> {
        Hall::ALL.iter().copied().find(|h| h.name() == name)
    }
}

impl fmt::Display for Hall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where the order should be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Delivery outside the campus; requires a street address.
    OffCampus,
    /// Delivery to a hall of residence; requires a room number.
    Hall(Hall),
}

impl Location {
    /// The wire string for this location.
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::OffCampus => OFF_CAMPUS_SENTINEL,
            Location::Hall(hall) => hall.name(),
        }
    }

    /// Parse a roster string back into a location.
    pub fn parse(value: &str) -> Option<Location> {
        if value == OFF_CAMPUS_SENTINEL {
            return Some(Location::OffCampus);
        }
        Hall::from_name(value).map(Location::Hall)
    }

    /// Whether this location is outside campus.
    pub fn is_off_campus(&self) -> bool {
        matches!(self, Location::OffCampus)
    }

    /// The full roster in display order, off-campus first.
    pub fn roster() -> Vec<Location> {
        let mut options = vec![Location::OffCampus];
        options.extend(Hall::ALL.iter().copied().map(Location::Hall));
        options
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Location::parse(&value)
            .ok_or_else(|| de::Error::custom(format!("unknown delivery location: {value}")))
    }
}

/// How the shopper pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Cash on delivery; capped at [`crate::checkout::COD_MAX_AMOUNT`].
    #[serde(rename = "COD")]
    Cod,
    /// Bank transfer; handled outside the order pipeline.
    Transfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "COD",
            PaymentMethod::Transfer => "Transfer",
        }
    }

    /// The label the order endpoint and receipts use.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "Cash on Delivery",
            PaymentMethod::Transfer => "Bank Transfer",
        }
    }
}

/// What the shopper has filled in so far.
///
/// Everything starts empty; [`CheckoutForm::prefill`] copies what the account
/// already knows. Validation happens at submit time, not on edit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    /// Recipient full name.
    #[serde(default)]
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Delivery location, once chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_type: Option<Location>,
    /// Street address; meaningful only for off-campus delivery.
    #[serde(default)]
    pub address: String,
    /// Room number; meaningful only for hall delivery.
    #[serde(default)]
    pub room_no: String,
    /// Payment method, once chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
}

impl CheckoutForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy contact details from a signed-in account.
    ///
    /// If the account's hall matches the roster it becomes the delivery
    /// location; any other hall text is carried into the address field as an
    /// off-campus starting point. Fields the account does not know stay
    /// untouched.
    pub fn prefill(&mut self, account: &Account) {
        if let Some(ref name) = account.name {
            self.name = name.clone();
        }
        if let Some(ref email) = account.email {
            self.email = email.clone();
        }
        if let Some(ref phone) = account.phone {
            self.phone = phone.clone();
        }
        if let Some(ref hall) = account.hall {
            match Location::parse(hall) {
                Some(location) => self.location_type = Some(location),
                None => {
                    self.location_type = Some(Location::OffCampus);
                    self.address = hall.clone();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_has_eighteen_halls() {
        assert_eq!(Hall::ALL.len(), 18);
        assert_eq!(Location::roster().len(), 19);
        assert_eq!(Location::roster()[0], Location::OffCampus);
    }

    #[test]
    fn test_hall_round_trips_by_name() {
        for hall in Hall::ALL {
            assert_eq!(Hall::from_name(hall.name()), Some(hall));
        }
        assert_eq!(Hall::from_name("Hogwarts"), None);
    }

    #[test]
    fn test_location_parse() {
        assert_eq!(
            Location::parse("Outside School (Off-Campus)"),
            Some(Location::OffCampus)
        );
        assert_eq!(
            Location::parse("Kuti Hall"),
            Some(Location::Hall(Hall::Kuti))
        );
        assert_eq!(Location::parse("kuti hall"), None);
    }

    #[test]
    fn test_location_serde_as_display_string() {
        let json = serde_json::to_string(&Location::Hall(Hall::StAnnes)).unwrap();
        assert_eq!(json, "\"St. Anne's Private Hostel\"");

        let parsed: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Location::Hall(Hall::StAnnes));

        assert!(serde_json::from_str::<Location>("\"Narnia\"").is_err());
    }

    #[test]
    fn test_payment_labels() {
        assert_eq!(PaymentMethod::Cod.label(), "Cash on Delivery");
        assert_eq!(PaymentMethod::Transfer.label(), "Bank Transfer");
    }

    #[test]
    fn test_prefill_with_roster_hall() {
        let account = Account {
            name: Some("Ada O.".to_string()),
            email: Some("ada@example.com".to_string()),
            phone: Some("0801 234 5678".to_string()),
            hall: Some("Queen Idia Hall".to_string()),
            ..Account::default()
        };

        let mut form = CheckoutForm::new();
        form.prefill(&account);

        assert_eq!(form.name, "Ada O.");
        assert_eq!(form.location_type, Some(Location::Hall(Hall::QueenIdia)));
        assert!(form.address.is_empty());
    }

    #[test]
    fn test_prefill_with_unrecognized_hall_text() {
        let account = Account {
            hall: Some("12 Awolowo Road, Bodija".to_string()),
            ..Account::default()
        };

        let mut form = CheckoutForm::new();
        form.prefill(&account);

        assert_eq!(form.location_type, Some(Location::OffCampus));
        assert_eq!(form.address, "12 Awolowo Road, Bodija");
    }

    #[test]
    fn test_prefill_leaves_unknown_fields_untouched() {
        let mut form = CheckoutForm::new();
        form.name = "Typed by hand".to_string();

        form.prefill(&Account::default());
        assert_eq!(form.name, "Typed by hand");
        assert_eq!(form.location_type, None);
    }
}
