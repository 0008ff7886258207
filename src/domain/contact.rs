use super::*;
use regex::Regex;
use serde::{Deserialize, Serialize};

const MAX_NAME_LEN: usize = 50;
const MAX_EMAIL_LEN: usize = 254;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn name_req() -> String {
        "Name is required!".to_string()
    }

    pub fn email_req() -> String {
        "Invalid Email Format!".to_string()
    }

    pub fn phone_req() -> String {
        "Invalid Phone Number (id-ID)!".to_string()
    }

    pub fn duplicate_req() -> String {
        "Name Already Registered!".to_string()
    }
}

impl Contact {
    pub fn new(name: String, email: String, phone: String) -> Self {
        Contact { name, email, phone }
    }

    pub fn validate_name(&self) -> bool {
        // Must not be blank
        // Not more than 50 characters
        let name = self.name.trim();
        !name.is_empty() && name.chars().count() <= MAX_NAME_LEN
    }

    pub fn validate_email(&self) -> Result<bool, AppError> {
        // Must contain '@' and a '.' somewhere after it
        // Not more than 254 characters
        let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")?;
        Ok(self.email.len() <= MAX_EMAIL_LEN && re.is_match(&self.email))
    }

    pub fn validate_phone(&self) -> Result<bool, AppError> {
        // Indonesian mobile number: 08.. or +628.. / 628..
        // followed by a known operator prefix and 5 to 11 more digits
        // ASCII digits only; `\d` would also take other scripts' digits
        let re = Regex::new(
            r"^(\+?62|0)8(1[1-9]|2[1238]|3[1238]|5[1235-9]|7[78]|9[5-9]|8[1-9])[\s0-9]{5,11}$",
        )?;
        Ok(re.is_match(&self.phone))
    }
}
