//! Business details shown across the site. Links that differ between
//! deployments can be overridden at build time through `SALON_*` env vars.

pub const SALON_NAME: &str = "Amy's Nails Salon & Spa";
pub const BOOKING_PATH: &str = "/booking";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Phone {
    pub display: &'static str,
    pub e164: &'static str,
}

impl Phone {
    pub fn href(&self) -> String {
        format!("tel:{}", self.e164)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SalonInfo {
    pub phone: Phone,
    pub street: &'static str,
    pub locality: &'static str,
    pub hours: &'static [&'static str],
    pub map_embed_url: &'static str,
    pub maps_url: &'static str,
    pub facebook_url: &'static str,
    pub tiktok_url: &'static str,
}

impl SalonInfo {
    pub fn address(&self) -> String {
        format!("{}, {}", self.street, self.locality)
    }
}

const DEFAULT_MAP_EMBED_URL: &str =
    "https://www.google.com/maps?q=909+Charity+Street,+Abbeville,+LA+70510&output=embed";
const DEFAULT_MAPS_URL: &str =
    "https://www.google.com/maps/search/?api=1&query=909+Charity+Street+Abbeville+LA+70510";
const DEFAULT_FACEBOOK_URL: &str = "https://www.facebook.com";
const DEFAULT_TIKTOK_URL: &str = "https://www.tiktok.com";

fn or_default(value: Option<&'static str>, default: &'static str) -> &'static str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default,
    }
}

pub fn salon() -> SalonInfo {
    SalonInfo {
        phone: Phone {
            display: "(337) 517-3832",
            e164: "+13375173832",
        },
        street: "909 Charity Street",
        locality: "Abbeville, Louisiana 70510",
        hours: &[
            "Monday-Friday: 9am - 6:30pm",
            "Saturday: 8:30am - 6pm",
            "Sunday: off",
        ],
        map_embed_url: or_default(option_env!("SALON_MAP_EMBED_URL"), DEFAULT_MAP_EMBED_URL),
        maps_url: or_default(option_env!("SALON_GOOGLE_URL"), DEFAULT_MAPS_URL),
        facebook_url: or_default(option_env!("SALON_FACEBOOK_URL"), DEFAULT_FACEBOOK_URL),
        tiktok_url: or_default(option_env!("SALON_TIKTOK_URL"), DEFAULT_TIKTOK_URL),
    }
}
