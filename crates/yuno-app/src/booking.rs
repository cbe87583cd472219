//! Booking form validation and the outbound WhatsApp message
//!
//! Nothing is sent from here: the caller hands the deep link to whatever
//! opens links on its platform.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use yuno_domain::model::{Catalog, Quote, VehicleRecord};
use yuno_domain::service::compute_quote;
use yuno_domain::service::quote_calculator::{parse_date, rental_days};
use yuno_types::{BookingError, QuoteError};

use crate::format::{describe_point, format_inr, plural_days};

/// Status line shown once the deep link has been handed off
pub const DISPATCHED_STATUS: &str = "WhatsApp opened — please review your booking and send.";

const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Raw booking form values, all as typed by the customer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub full_name: String,
    pub phone: String,
    pub pickup_date: String,
    pub pickup_time: String,
    pub return_date: String,
    pub return_time: String,
    pub vehicle_id: String,
    pub notes: String,
}

impl BookingForm {
    /// Validate against the catalog.
    ///
    /// Checks run in form order and stop at the first problem. `today` is
    /// the earliest allowed pickup date.
    pub fn validate(
        &self,
        catalog: &Catalog,
        today: NaiveDate,
    ) -> Result<BookingRequest, BookingError> {
        let full_name = self.full_name.trim();
        if full_name.is_empty() {
            return Err(BookingError::MissingName);
        }
        let phone = self.phone.trim();
        if phone.is_empty() {
            return Err(BookingError::MissingPhone);
        }
        if self.pickup_date.trim().is_empty() || self.return_date.trim().is_empty() {
            return Err(BookingError::MissingDates);
        }

        let pickup = parse_date(&self.pickup_date).map_err(BookingError::InvalidDuration)?;
        let return_date = parse_date(&self.return_date).map_err(BookingError::InvalidDuration)?;
        rental_days(pickup, return_date).map_err(BookingError::InvalidDuration)?;
        if pickup < today {
            return Err(BookingError::PickupBeforeToday);
        }

        let vehicle_id = self.vehicle_id.trim();
        if vehicle_id.is_empty() {
            return Err(BookingError::MissingVehicle);
        }
        let (_, vehicle) = catalog
            .find(vehicle_id)
            .ok_or_else(|| BookingError::VehicleNotFound(vehicle_id.to_string()))?;
        if !vehicle.is_selectable() {
            return Err(BookingError::VehicleUnavailable(vehicle_id.to_string()));
        }

        let quote = self.quote_for(vehicle).map_err(BookingError::InvalidDuration)?;
        debug!(vehicle = vehicle_id, days = quote.duration_days, "booking validated");

        Ok(BookingRequest {
            customer_name: full_name.to_string(),
            phone: phone.to_string(),
            vehicle: vehicle.clone(),
            quote,
            notes: self.notes.trim().to_string(),
        })
    }

    fn quote_for(&self, vehicle: &VehicleRecord) -> Result<Quote, QuoteError> {
        compute_quote(
            &self.pickup_date,
            &self.pickup_time,
            &self.return_date,
            &self.return_time,
            vehicle.daily_rate,
            vehicle.weekly_rate,
        )
    }
}

/// A validated booking ready to be turned into a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub customer_name: String,
    pub phone: String,
    pub vehicle: VehicleRecord,
    pub quote: Quote,
    pub notes: String,
}

impl BookingRequest {
    fn rate_line(&self) -> String {
        let mut line = format!("Rate: {} per day", format_inr(self.vehicle.daily_rate));
        if self.vehicle.has_weekly_tier() {
            line.push_str(&format!(
                " • {} per week",
                format_inr(self.vehicle.weekly_rate)
            ));
        }
        line
    }

    /// Plain-text booking message, one field per line
    pub fn message(&self, brand_name: &str) -> String {
        let days = plural_days(self.quote.duration_days);
        let notes = if self.notes.is_empty() {
            "-"
        } else {
            self.notes.as_str()
        };

        let lines = [
            format!("{} – Booking Request", brand_name),
            "Customer".to_string(),
            format!("• Name: {}", self.customer_name),
            format!("• Phone: {}", self.phone),
            "Vehicle".to_string(),
            format!("• Model: {}", self.vehicle.name),
            format!("• Subtitle: {}", self.vehicle.subtitle),
            format!("• Description: {}", self.vehicle.description),
            format!("• ID: {}", self.vehicle.id),
            format!("• Type: {}", self.vehicle.type_label()),
            format!("• {}", self.rate_line()),
            "Rental".to_string(),
            format!("• Pickup: {}", describe_point(&self.quote.pickup)),
            format!("• Return: {}", describe_point(&self.quote.return_at)),
            format!("• Duration: {}", days),
            format!(
                "• Estimated total: {} for {}",
                format_inr(self.quote.estimated_total),
                days
            ),
            "Notes".to_string(),
            format!("• {}", notes),
            "Important".to_string(),
            "• Customer confirms valid driving licence and agrees to rental terms.".to_string(),
        ];
        lines.join("\n")
    }

    /// `https://wa.me/<number>?text=<encoded message>`
    pub fn whatsapp_link(&self, number: &str, brand_name: &str) -> String {
        let recipient: String = number.chars().filter(char::is_ascii_digit).collect();
        let link = format!(
            "{}/{}?text={}",
            WHATSAPP_BASE_URL,
            recipient,
            urlencoding::encode(&self.message(brand_name))
        );
        info!(vehicle = %self.vehicle.id, "booking link prepared");
        link
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yuno_domain::model::{CardDescriptor, RawValue};
    use yuno_domain::service::build_catalog;

    fn catalog() -> Catalog {
        build_catalog(&[
            CardDescriptor {
                id: Some("fz-v3".to_string()),
                vehicle_type: Some("bike".to_string()),
                day: Some(RawValue::from("500")),
                week: Some(RawValue::from("3000")),
                name: Some("Yamaha FZ V3".to_string()),
                subtitle: Some("150cc".to_string()),
                description: Some("City commuter".to_string()),
                ..Default::default()
            },
            CardDescriptor {
                id: Some("dio".to_string()),
                vehicle_type: Some("scooty".to_string()),
                day: Some(RawValue::from("350")),
                available: Some(RawValue::from("false")),
                name: Some("Honda Dio".to_string()),
                ..Default::default()
            },
        ])
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn form() -> BookingForm {
        BookingForm {
            full_name: " Asha Rao ".to_string(),
            phone: "9876543210".to_string(),
            pickup_date: "2024-03-01".to_string(),
            pickup_time: "10:00".to_string(),
            return_date: "2024-03-08".to_string(),
            return_time: "10:00".to_string(),
            vehicle_id: "fz-v3".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_valid_booking() {
        let request = form().validate(&catalog(), today()).unwrap();
        assert_eq!(request.customer_name, "Asha Rao");
        assert_eq!(request.quote.duration_days, 8);
        assert_eq!(request.quote.estimated_total, 3500);
    }

    #[test]
    fn test_validation_order() {
        let catalog = catalog();
        let mut f = BookingForm::default();
        assert_eq!(f.validate(&catalog, today()), Err(BookingError::MissingName));
        f.full_name = "A".to_string();
        assert_eq!(f.validate(&catalog, today()), Err(BookingError::MissingPhone));
        f.phone = "1".to_string();
        f.pickup_date = "2024-03-02".to_string();
        assert_eq!(f.validate(&catalog, today()), Err(BookingError::MissingDates));
        f.return_date = "2024-03-01".to_string();
        assert_eq!(
            f.validate(&catalog, today()),
            Err(BookingError::InvalidDuration(QuoteError::ReturnBeforePickup))
        );
        f.return_date = "2024-03-03".to_string();
        assert_eq!(f.validate(&catalog, today()), Err(BookingError::MissingVehicle));
        f.vehicle_id = "ghost".to_string();
        assert_eq!(
            f.validate(&catalog, today()),
            Err(BookingError::VehicleNotFound("ghost".to_string()))
        );
        f.vehicle_id = "dio".to_string();
        assert_eq!(
            f.validate(&catalog, today()),
            Err(BookingError::VehicleUnavailable("dio".to_string()))
        );
    }

    #[test]
    fn test_pickup_in_the_past() {
        let mut f = form();
        f.pickup_date = "2024-02-28".to_string();
        assert_eq!(
            f.validate(&catalog(), today()),
            Err(BookingError::PickupBeforeToday)
        );
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(BookingError::MissingName.to_string(), "Please enter your full name.");
        assert_eq!(
            BookingError::InvalidDuration(QuoteError::ReturnBeforePickup).to_string(),
            "Invalid rental duration."
        );
    }

    #[test]
    fn test_message_layout() {
        let request = form().validate(&catalog(), today()).unwrap();
        let message = request.message("YUNO RIDE");
        let lines: Vec<_> = message.lines().collect();
        assert_eq!(lines[0], "YUNO RIDE – Booking Request");
        assert!(lines.contains(&"• Type: Bike"));
        assert!(lines.contains(&"• Rate: ₹500 per day • ₹3,000 per week"));
        assert!(lines.contains(&"• Pickup: 01 Mar 2024 at 10:00 AM"));
        assert!(lines.contains(&"• Duration: 8 days"));
        assert!(lines.contains(&"• Estimated total: ₹3,500 for 8 days"));
        assert!(lines.contains(&"• -"));
        assert!(lines.iter().all(|l| !l.is_empty()));
    }

    #[test]
    fn test_whatsapp_link() {
        let mut f = form();
        f.notes = "Need helmet".to_string();
        let request = f.validate(&catalog(), today()).unwrap();
        let link = request.whatsapp_link("+91 89518 49454", "YUNO RIDE");
        assert!(link.starts_with("https://wa.me/918951849454?text=YUNO%20RIDE%20"));
        assert!(link.contains("Need%20helmet"));
        assert!(!link.contains('\n'));
        assert!(link.contains("%0A"));
    }
}
