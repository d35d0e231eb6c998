use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating mobile numbers, hyphens optional
    /// - Valid: "010-1234-5678", "01012345678", "016-123-4567"
    /// - Invalid: "02-123-4567", "010-12-5678", "phone"
    pub static ref MOBILE_REGEX: Regex = Regex::new(r"^01[016789]-?\d{3,4}-?\d{4}$").unwrap();

    /// Regex for validating landline numbers, hyphens optional
    /// - Valid: "02-123-4567", "031-1234-5678", "0212345678"
    /// - Invalid: "1234", "phone", "010-1234-5678-9"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^0\d{1,2}-?\d{3,4}-?\d{4}$").unwrap();
}
