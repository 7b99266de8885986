use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use crate::metrics::{cpc, ctr, roas, round_money};

/// Column names in the order every row is written.
pub const HEADER: [&str; 15] = [
    "ID",
    "Campaign_Name",
    "Date",
    "Impressions",
    "Clicks",
    "Cost_EUR",
    "Conversions",
    "Revenue_EUR",
    "Device",
    "Location",
    "Keywords",
    "Ad_Group",
    "CTR",
    "CPC",
    "ROAS",
];

pub const CAMPAIGNS: [&str; 8] = [
    "Google Ads Search Campaign Premium",
    "Facebook Ads Video Retargeting Advanced",
    "Instagram Stories Brand Awareness Pro",
    "YouTube Ads Product Demo Extended",
    "LinkedIn Sponsored Content B2B Elite",
    "TikTok Ads Creative Campaign Viral",
    "Pinterest Shopping Ads Lifestyle",
    "Twitter Ads Engagement Campaign Plus",
];

pub const LOCATIONS: [&str; 8] = [
    "Paris",
    "Lyon",
    "Marseille",
    "Toulouse",
    "Bordeaux",
    "Lille",
    "Nantes",
    "Strasbourg",
];

pub const KEYWORDS: [&str; 12] = [
    "chaussures running premium",
    "smartphone dernière génération",
    "ordinateur portable gaming",
    "montre connectée sport",
    "écouteurs sans fil",
    "tablette graphique professionnelle",
    "appareil photo reflex",
    "drone 4K professionnel",
    "casque réalité virtuelle",
    "imprimante 3D",
    "robot aspirateur intelligent",
    "caméra sécurité IP",
];

pub const KEYWORD_SEPARATOR: &str = ", ";

/// Length of the date window ending at the generation day.
pub const DATE_WINDOW_DAYS: i64 = 90;

const IMPRESSIONS_MIN: u32 = 100;
const IMPRESSIONS_MAX: u32 = 50_000;
const COST_CENTS_MIN: i64 = 1_000;
const COST_CENTS_MAX: i64 = 50_000;
/// Revenue multiplier range, in basis points of the cost.
const REVENUE_FACTOR_BPS_MIN: i64 = 5_000;
const REVENUE_FACTOR_BPS_MAX: i64 = 30_000;
const AD_GROUP_MAX: u32 = 50;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Desktop,
    Mobile,
    Tablet,
}

impl Device {
    pub const ALL: [Device; 3] = [Device::Desktop, Device::Mobile, Device::Tablet];
}

/// One row of simulated campaign performance.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Record {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "Campaign_Name")]
    pub campaign_name: String,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Impressions")]
    pub impressions: u32,
    #[serde(rename = "Clicks")]
    pub clicks: u32,
    #[serde(rename = "Cost_EUR")]
    pub cost_eur: Decimal,
    #[serde(rename = "Conversions")]
    pub conversions: u32,
    #[serde(rename = "Revenue_EUR")]
    pub revenue_eur: Decimal,
    #[serde(rename = "Device")]
    pub device: Device,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Keywords")]
    pub keywords: String,
    #[serde(rename = "Ad_Group")]
    pub ad_group: String,
    #[serde(rename = "CTR")]
    pub ctr: Decimal,
    #[serde(rename = "CPC")]
    pub cpc: Decimal,
    #[serde(rename = "ROAS")]
    pub roas: Decimal,
}

/// Draws [`Record`]s whose dates fall in the window before `today`.
#[derive(Debug, Clone, Copy)]
pub struct RecordSampler {
    start_date: NaiveDate,
}

impl RecordSampler {
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        RecordSampler {
            start_date: today - Duration::days(DATE_WINDOW_DAYS),
        }
    }

    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn sample<R: Rng + ?Sized>(&self, id: u64, rng: &mut R) -> Record {
        let impressions = rng.gen_range(IMPRESSIONS_MIN..=IMPRESSIONS_MAX);
        // floor(impressions * 0.05), at least 5 given the impressions floor
        let clicks = rng.gen_range(1..=impressions / 20);
        let cost_eur = Decimal::new(rng.gen_range(COST_CENTS_MIN..=COST_CENTS_MAX), 2);
        // floor(clicks * 0.1)
        let conversions = rng.gen_range(0..=clicks / 10);
        let factor = Decimal::new(
            rng.gen_range(REVENUE_FACTOR_BPS_MIN..=REVENUE_FACTOR_BPS_MAX),
            4,
        );
        let revenue_eur = round_money(cost_eur * factor);

        let date = self.start_date + Duration::days(rng.gen_range(0..DATE_WINDOW_DAYS));
        let num_keywords = rng.gen_range(3..=5);
        let keywords = KEYWORDS
            .choose_multiple(rng, num_keywords)
            .copied()
            .collect::<Vec<_>>()
            .join(KEYWORD_SEPARATOR);

        Record {
            id,
            campaign_name: CAMPAIGNS.choose(rng).copied().unwrap_or_default().to_owned(),
            date,
            impressions,
            clicks,
            cost_eur,
            conversions,
            revenue_eur,
            device: Device::ALL.choose(rng).copied().unwrap_or(Device::Desktop),
            location: LOCATIONS.choose(rng).copied().unwrap_or_default().to_owned(),
            keywords,
            ad_group: format!("AdGroup_{}", rng.gen_range(1..=AD_GROUP_MAX)),
            ctr: ctr(clicks, impressions),
            cpc: cpc(cost_eur, clicks),
            roas: roas(revenue_eur, cost_eur),
        }
    }
}
