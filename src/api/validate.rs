//! Argument checks run before any request is built.

use std::net::IpAddr;

use crate::error::{Error, Result};
use crate::model::{Action, Amount, PlanType};

/// Minimum username/password length on residential plans.
const MIN_RESIDENTIAL_CREDENTIAL_LEN: usize = 8;

pub(crate) fn require(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::invalid(format!(
            "Parameter '{}' is required and cannot be empty.",
            name
        )));
    }
    Ok(())
}

pub(crate) fn positive_integer(name: &str, value: u32) -> Result<()> {
    if value < 1 {
        return Err(Error::invalid(format!(
            "Parameter '{}' must be a positive integer.",
            name
        )));
    }
    Ok(())
}

pub(crate) fn ip_address(value: &str) -> Result<IpAddr> {
    require("ip_address", value)?;
    value
        .parse()
        .map_err(|_| Error::invalid("IP address must be valid."))
}

/// Integer-only gigabyte amount (IPv6 plans).
pub(crate) fn whole_gigabytes(gb: Amount) -> Result<()> {
    if !gb.is_whole() || !gb.is_positive() {
        return Err(Error::invalid("Parameter 'gb' must be a positive integer."));
    }
    Ok(())
}

/// Residential/mobile amount: whole to add, fractional allowed to remove.
pub(crate) fn gigabytes(action: Action, gb: Amount) -> Result<()> {
    if !gb.is_positive() {
        return Err(Error::invalid("Parameter 'gb' must be a positive number."));
    }
    if action == Action::Add && !gb.is_whole() {
        return Err(Error::invalid(
            "For 'add' action, 'gb' must be a whole number (integer).",
        ));
    }
    Ok(())
}

/// Username/password shape. `field` is "Username" or "Password".
pub(crate) fn credential(field: &str, value: &str, plan_type: PlanType) -> Result<()> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::invalid(format!(
            "{} must contain only alphanumeric characters (a-z, A-Z, 0-9).",
            field
        )));
    }
    if plan_type == PlanType::Residential && value.len() < MIN_RESIDENTIAL_CREDENTIAL_LEN {
        return Err(Error::invalid(format!(
            "{} must be at least {} characters long for residential plans.",
            field, MIN_RESIDENTIAL_CREDENTIAL_LEN
        )));
    }
    Ok(())
}
