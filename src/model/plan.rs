//! Plan options, kinds and the purchase order union.

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::Amount;
use crate::error::{Error, Result};

closed_set! {
    /// Product line as named by the purchase endpoint (`getplan/{option}`).
    pub enum PlanOption("option") {
        Residential => "residential",
        Mobile => "mobile",
        Ipv6 => "IPv6",
        Datacenter => "datacenter",
        Isp => "ISP",
    }
}

closed_set! {
    /// Product line as named by the read/whitelist endpoints (`plan/{kind}/...`).
    pub enum PlanKind("plan kind") {
        Residential => "residential",
        Ipv6 => "ipv6",
        Datacenter => "datacenter",
        Mobile => "mobile",
        Isp => "isp",
    }
}

closed_set! {
    /// Locations available for ISP plans.
    pub enum IspRegion("region") {
        Virm => "virm",
        Dtag => "dtag",
        Vocu => "vocu",
        DtagNl => "dtag_nl",
        Pol => "pol",
        Bra => "bra",
        Lva => "lva",
        Fra => "fra",
        Rou => "rou",
        Can => "can",
        Nor => "nor",
        Aut => "aut",
        Ukr => "ukr",
        Tur => "tur",
        Jpn => "jpn",
        Isr => "isr",
        Twn => "twn",
        Kor => "kor",
        Esp => "esp",
        Sgp => "sgp",
        Hkn => "hkn",
        Tha => "tha",
        Ind => "ind",
        Ita => "ita",
    }
}

/// Datacenter plan duration in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatacenterTerm {
    OneDay,
    SevenDays,
    ThirtyDays,
}

impl DatacenterTerm {
    pub fn days(&self) -> u32 {
        match self {
            DatacenterTerm::OneDay => 1,
            DatacenterTerm::SevenDays => 7,
            DatacenterTerm::ThirtyDays => 30,
        }
    }
}

impl TryFrom<i64> for DatacenterTerm {
    type Error = Error;

    fn try_from(days: i64) -> Result<Self> {
        match days {
            1 => Ok(DatacenterTerm::OneDay),
            7 => Ok(DatacenterTerm::SevenDays),
            30 => Ok(DatacenterTerm::ThirtyDays),
            _ => Err(Error::invalid(
                "Parameter 'plan' must be one of the following values: 1, 7, 30.",
            )),
        }
    }
}

impl TryFrom<Amount> for DatacenterTerm {
    type Error = Error;

    fn try_from(amount: Amount) -> Result<Self> {
        match amount {
            Amount::Whole(days) => DatacenterTerm::try_from(days),
            // Terms match by type as well as value, so `7.0` is not `7`.
            Amount::Fractional(_) => Err(Error::invalid(
                "Parameter 'plan' must be one of the following values: 1, 7, 30.",
            )),
        }
    }
}

impl FromStr for DatacenterTerm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DatacenterTerm::try_from(s.parse::<Amount>()?)
    }
}

impl fmt::Display for DatacenterTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.days())
    }
}

/// The two kinds of IPv6 plan.
#[derive(Debug, Clone, PartialEq)]
pub enum Ipv6Order {
    /// Unmetered plan with a fixed speed tier.
    Unlimited { plan: Amount, speed: Amount },
    /// Metered plan.
    Bandwidth { bandwidth: Amount },
}

/// A plan purchase, one variant per product line.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOrder {
    Residential { bandwidth: Amount },
    Mobile { bandwidth: Amount },
    Ipv6(Ipv6Order),
    Datacenter { plan: DatacenterTerm },
    Isp { ip: String, region: IspRegion },
}

/// Loosely typed purchase parameters, for callers holding strings.
///
/// Converted into a [`PlanOrder`] by [`PlanOrder::from_params`], which
/// enforces the per-option requirements.
#[derive(Debug, Clone, Default)]
pub struct PurchaseParams {
    pub bandwidth: Option<Amount>,
    pub plan: Option<Amount>,
    pub speed: Option<Amount>,
    pub ip: Option<String>,
    pub region: Option<String>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Payload<'a> {
    Bandwidth { bandwidth: String },
    Ipv6Unlimited { plan: Amount, speed: Amount },
    Ipv6Bandwidth { bandwidth: Amount },
    Datacenter { plan: String },
    Isp { ip: &'a str, region: IspRegion },
}

impl PlanOrder {
    pub fn option(&self) -> PlanOption {
        match self {
            PlanOrder::Residential { .. } => PlanOption::Residential,
            PlanOrder::Mobile { .. } => PlanOption::Mobile,
            PlanOrder::Ipv6(_) => PlanOption::Ipv6,
            PlanOrder::Datacenter { .. } => PlanOption::Datacenter,
            PlanOrder::Isp { .. } => PlanOption::Isp,
        }
    }

    /// Builds an order from an option name and loose parameters.
    ///
    /// IPv6 takes either `plan` + `speed` or `bandwidth`, never both.
    pub fn from_params(option: &str, params: &PurchaseParams) -> Result<Self> {
        let option: PlanOption = option.parse()?;
        let order = match option {
            PlanOption::Residential | PlanOption::Mobile => {
                let bandwidth = params.bandwidth.ok_or_else(|| {
                    Error::invalid(format!(
                        "Parameter 'bandwidth' is required for {} plan.",
                        option
                    ))
                })?;
                if option == PlanOption::Residential {
                    PlanOrder::Residential { bandwidth }
                } else {
                    PlanOrder::Mobile { bandwidth }
                }
            }
            PlanOption::Ipv6 => match (params.plan, params.speed, params.bandwidth) {
                (Some(plan), Some(speed), None) => PlanOrder::Ipv6(Ipv6Order::Unlimited { plan, speed }),
                (None, None, Some(bandwidth)) => PlanOrder::Ipv6(Ipv6Order::Bandwidth { bandwidth }),
                (Some(_), Some(_), Some(_)) => {
                    return Err(Error::invalid(
                        "For IPv6 plan, 'plan'/'speed' and 'bandwidth' are mutually exclusive.",
                    ));
                }
                _ => {
                    return Err(Error::invalid(
                        "For IPv6 plan, provide either 'plan' and 'speed' or 'bandwidth'.",
                    ));
                }
            },
            PlanOption::Datacenter => {
                let plan = params.plan.ok_or_else(|| {
                    Error::invalid("Parameter 'plan' is required for datacenter plan.")
                })?;
                PlanOrder::Datacenter {
                    plan: DatacenterTerm::try_from(plan)?,
                }
            }
            PlanOption::Isp => match (&params.ip, &params.region) {
                (Some(ip), Some(region)) => PlanOrder::Isp {
                    ip: ip.clone(),
                    region: region.parse()?,
                },
                _ => {
                    return Err(Error::invalid(
                        "Parameters 'ip' and 'region' are required for ISP plan.",
                    ));
                }
            },
        };
        order.validate()?;
        Ok(order)
    }

    /// Range checks the variant types cannot express.
    pub fn validate(&self) -> Result<()> {
        let positive = |name: &str, amount: &Amount| {
            if amount.is_positive() {
                Ok(())
            } else {
                Err(Error::invalid(format!(
                    "Parameter '{}' must be a positive number.",
                    name
                )))
            }
        };

        match self {
            PlanOrder::Residential { bandwidth } | PlanOrder::Mobile { bandwidth } => {
                positive("bandwidth", bandwidth)
            }
            PlanOrder::Ipv6(Ipv6Order::Unlimited { plan, speed }) => {
                positive("plan", plan)?;
                positive("speed", speed)
            }
            PlanOrder::Ipv6(Ipv6Order::Bandwidth { bandwidth }) => positive("bandwidth", bandwidth),
            PlanOrder::Datacenter { .. } => Ok(()),
            PlanOrder::Isp { ip, .. } => {
                if ip.is_empty() {
                    Err(Error::invalid(
                        "Parameter 'ip' is required and cannot be empty.",
                    ))
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Request body for `getplan/{option}`.
    ///
    /// Residential/mobile bandwidth and the datacenter term are sent as
    /// strings; IPv6 quantities are sent as JSON numbers.
    pub fn payload(&self) -> Result<Value> {
        let payload = match self {
            PlanOrder::Residential { bandwidth } | PlanOrder::Mobile { bandwidth } => {
                Payload::Bandwidth {
                    bandwidth: bandwidth.to_string(),
                }
            }
            PlanOrder::Ipv6(Ipv6Order::Unlimited { plan, speed }) => Payload::Ipv6Unlimited {
                plan: *plan,
                speed: *speed,
            },
            PlanOrder::Ipv6(Ipv6Order::Bandwidth { bandwidth }) => Payload::Ipv6Bandwidth {
                bandwidth: *bandwidth,
            },
            PlanOrder::Datacenter { plan } => Payload::Datacenter {
                plan: plan.to_string(),
            },
            PlanOrder::Isp { ip, region } => Payload::Isp {
                ip: ip.as_str(),
                region: *region,
            },
        };
        Ok(serde_json::to_value(payload)?)
    }
}
