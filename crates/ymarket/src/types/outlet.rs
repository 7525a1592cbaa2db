use serde::{Deserialize, Serialize};

use super::{wire_enum, Pager, Paging};

/// A point of sale (outlet): a pickup point, a retail space, or both.
///
/// The same shape is sent on create/update and returned on reads; `id` is
/// only ever filled in by the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointOfSale {
    #[serde(default, skip_serializing)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(rename = "type")]
    pub outlet_type: OutletType,
    /// Longitude and latitude separated by a comma and/or space,
    /// e.g. `20.4522144, 54.7104264`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coords: Option<String>,
    #[serde(default)]
    pub is_main: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_outlet_code: Option<String>,
    pub visibility: OutletVisibility,
    pub address: Address,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub phones: Vec<String>,
    #[serde(default)]
    pub working_schedule: WorkingSchedule,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub delivery_rules: Vec<DeliveryRule>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub emails: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub region_id: i64,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkingSchedule {
    pub work_in_holiday: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub schedule_items: Vec<ScheduleItem>,
}

/// Opening hours for a run of days, e.g. MONDAY..FRIDAY 09:00-20:00.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    pub start_day: Day,
    pub end_day: Day,
    /// `HH:MM`
    pub start_time: String,
    /// `HH:MM`
    pub end_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRule {
    #[serde(default)]
    pub cost: i64,
    #[serde(default)]
    pub min_delivery_days: i64,
    #[serde(default)]
    pub max_delivery_days: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_service_id: Option<i64>,
    /// Hour of the day before which an order ships on the same terms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_before: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_free_pickup: Option<i64>,
}

wire_enum! {
    pub enum OutletType {
        /// Pickup point.
        Depot => "DEPOT",
        /// Retail space and pickup point.
        Mixed => "MIXED",
        /// Retail space.
        Retail => "RETAIL",
    }
}

wire_enum! {
    pub enum OutletVisibility {
        /// Turned off.
        Hidden => "HIDDEN",
        /// Turned on.
        Visible => "VISIBLE",
    }
}

wire_enum! {
    pub enum Day {
        Monday => "MONDAY",
        Tuesday => "TUESDAY",
        Wednesday => "WEDNESDAY",
        Thursday => "THURSDAY",
        Friday => "FRIDAY",
        Saturday => "SATURDAY",
        Sunday => "SUNDAY",
    }
}

/// `result` of point of sale creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedOutlet {
    pub id: i64,
}

/// One page of the point of sale listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointsOfSalePage {
    #[serde(deserialize_with = "super::null_as_default")]
    pub outlets: Vec<PointOfSale>,
    pub paging: Paging,
    pub pager: Pager,
}
