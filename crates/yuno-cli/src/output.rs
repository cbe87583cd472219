//! Output formatting module

use serde::Serialize;
use yuno_app::booking::{BookingRequest, DISPATCHED_STATUS};
use yuno_app::format::{format_inr, rental_summary};
use yuno_app::render::render_session;
use yuno_app::session::{FleetSession, VehicleOption};
use yuno_domain::model::{Catalog, Quote};
use yuno_domain::service::{CarouselView, DotSync};
use yuno_types::{OutputFormat, Result};

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Serialize)]
struct FleetOutput<'a> {
    view: CarouselView,
    dots: Vec<bool>,
    dot_sync: DotSync,
    booking_vehicle: Option<&'a str>,
}

pub fn output_fleet(output_format: OutputFormat, session: &FleetSession) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&FleetOutput {
            view: session.view(),
            dots: session.dots().dots(),
            dot_sync: session.last_dot_sync(),
            booking_vehicle: session.booking_vehicle(),
        });
    }

    print!("{}", render_session(session));
    if let Some(id) = session.booking_vehicle() {
        println!("Booking vehicle: {}", id);
    }
    Ok(())
}

#[derive(Serialize)]
struct VehicleRow<'a> {
    #[serde(flatten)]
    option: &'a VehicleOption,
    daily_rate: u64,
    weekly_rate: u64,
}

pub fn output_vehicles(
    output_format: OutputFormat,
    catalog: &Catalog,
    options: &[VehicleOption],
) -> Result<()> {
    let rows: Vec<_> = options
        .iter()
        .filter_map(|option| {
            catalog.find(&option.id).map(|(_, v)| VehicleRow {
                option,
                daily_rate: v.daily_rate,
                weekly_rate: v.weekly_rate,
            })
        })
        .collect();

    if output_format == OutputFormat::Json {
        return print_json(&rows);
    }

    if rows.is_empty() {
        println!("No vehicles available for booking.");
        return Ok(());
    }
    println!("{:<16} {:<36} {:>10} {:>10}", "ID", "Vehicle", "Per day", "Per week");
    println!("{}", "-".repeat(75));
    for row in rows {
        let weekly = if row.weekly_rate > 0 {
            format_inr(row.weekly_rate)
        } else {
            "-".to_string()
        };
        println!(
            "{:<16} {:<36} {:>10} {:>10}",
            row.option.id,
            row.option.label,
            format_inr(row.daily_rate),
            weekly
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct QuoteOutput<'a> {
    vehicle_id: &'a str,
    #[serde(flatten)]
    quote: &'a Quote,
    summary: String,
}

pub fn output_quote(output_format: OutputFormat, vehicle_id: &str, quote: &Quote) -> Result<()> {
    let summary = rental_summary(quote);
    if output_format == OutputFormat::Json {
        return print_json(&QuoteOutput {
            vehicle_id,
            quote,
            summary,
        });
    }

    println!("\nRental Quote");
    println!("============");
    println!("Vehicle:         {}", vehicle_id);
    println!("Duration:        {} day(s)", quote.duration_days);
    println!("Daily rate:      {}", format_inr(quote.daily_rate));
    if quote.weekly_rate > 0 {
        println!("Weekly rate:     {}", format_inr(quote.weekly_rate));
    }
    if quote.uses_weekly_tier() {
        println!(
            "Tiering:         {} week(s) + {} day(s)",
            quote.duration_days / 7,
            quote.duration_days % 7
        );
    }
    println!("Estimated total: {}", format_inr(quote.estimated_total));
    println!("\n{}", summary);
    Ok(())
}

#[derive(Serialize)]
struct BookingOutput<'a> {
    request: &'a BookingRequest,
    message: String,
    link: String,
    status: &'static str,
}

pub fn output_booking(
    output_format: OutputFormat,
    request: &BookingRequest,
    number: &str,
    brand_name: &str,
) -> Result<()> {
    let message = request.message(brand_name);
    let link = request.whatsapp_link(number, brand_name);
    if output_format == OutputFormat::Json {
        return print_json(&BookingOutput {
            request,
            message,
            link,
            status: DISPATCHED_STATUS,
        });
    }

    println!("{}", message);
    println!("\n{}", "-".repeat(60));
    println!("Open this link to send the request:\n{}", link);
    println!("\n{}", DISPATCHED_STATUS);
    Ok(())
}
