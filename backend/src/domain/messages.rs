//! Localized user-facing message table.
//!
//! Services never hard-code response text. They look messages up by
//! [`MessageKey`] in the configured [`Locale`]; Thai is the default because the
//! public site is Thai-first.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Supported response languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Thai (`th`).
    #[default]
    #[serde(alias = "th")]
    Thai,
    /// English (`en`).
    #[serde(alias = "en")]
    English,
}

/// Unknown locale tag supplied through configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{0}'; expected th|en")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "th" | "thai" => Ok(Self::Thai),
            "en" | "english" => Ok(Self::English),
            other => Err(UnknownLocale(other.to_owned())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Thai => f.write_str("th"),
            Self::English => f.write_str("en"),
        }
    }
}

/// Every message the service can return to a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    RegistrationIncomplete,
    UsernameTooShort,
    UsernameTooLong,
    EmailInvalid,
    PasswordTooShort,
    AccountTaken,
    Registered,
    LoginIncomplete,
    AccountNotFound,
    WrongPassword,
    AdminOnly,
    Unauthorized,
    LoggedIn,
    LoggedOut,
    BookingSaved,
    BookingStartInPast,
    BookingEndBeforeStart,
    BookingOverlap,
    BookingNotFound,
    PeopleAtLeastOne,
    PeopleTooMany,
    InvalidStatus,
    ActivityAdded,
    ActivityDeleted,
    ActivityNotFound,
    ImageAdded,
    ImageDeleted,
    ImageNotFound,
    InvalidCategory,
    InvalidDate,
    InvalidId,
    MalformedBody,
    FetchFailed,
    SaveFailed,
    UpdateFailed,
    DeleteFailed,
    DatabaseUnavailable,
    DatabaseReachable,
    DatabaseUnreachable,
}

/// Message lookup bound to one locale.
///
/// # Examples
/// ```
/// use temple_backend::domain::{Locale, MessageKey, Messages};
///
/// let th = Messages::new(Locale::Thai);
/// assert_eq!(th.text(MessageKey::BookingNotFound), "ไม่พบข้อมูลการจอง");
/// assert_eq!(th.missing_field("phone"), "กรุณากรอก phone");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    /// Bind the table to `locale`.
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// The active locale.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Message naming a missing required field.
    #[must_use]
    pub fn missing_field(&self, field: &str) -> String {
        match self.locale {
            Locale::Thai => format!("กรุณากรอก {field}"),
            Locale::English => format!("please provide {field}"),
        }
    }

    /// Look up a fixed message.
    #[must_use]
    pub const fn text(&self, key: MessageKey) -> &'static str {
        match self.locale {
            Locale::Thai => thai(key),
            Locale::English => english(key),
        }
    }
}

const fn thai(key: MessageKey) -> &'static str {
    match key {
        MessageKey::RegistrationIncomplete => "กรุณากรอกข้อมูลให้ครบถ้วน",
        MessageKey::UsernameTooShort => "ชื่อผู้ใช้ต้องมีความยาวอย่างน้อย 3 ตัวอักษร",
        MessageKey::UsernameTooLong => "ชื่อผู้ใช้ต้องมีความยาวไม่เกิน 20 ตัวอักษร",
        MessageKey::EmailInvalid => "กรุณากรอกอีเมลให้ถูกต้อง",
        MessageKey::PasswordTooShort => "รหัสผ่านต้องมีความยาวอย่างน้อย 6 ตัวอักษร",
        MessageKey::AccountTaken => "อีเมลหรือชื่อผู้ใช้นี้ถูกใช้งานแล้ว",
        MessageKey::Registered => "ลงทะเบียนสำเร็จ",
        MessageKey::LoginIncomplete => "กรุณากรอกอีเมลหรือชื่อผู้ใช้และรหัสผ่าน",
        MessageKey::AccountNotFound => "ไม่พบบัญชีผู้ใช้นี้",
        MessageKey::WrongPassword => "รหัสผ่านไม่ถูกต้อง",
        MessageKey::AdminOnly => "ไม่มีสิทธิการเข้าถึง",
        MessageKey::Unauthorized => "Unauthorized",
        MessageKey::LoggedIn => "เข้าสู่ระบบสำเร็จ",
        MessageKey::LoggedOut => "ออกจากระบบเรียบร้อย",
        MessageKey::BookingSaved => "บันทึกการจองเรียบร้อย",
        MessageKey::BookingStartInPast => "วันที่เริ่มต้นต้องไม่น้อยกว่าวันปัจจุบัน",
        MessageKey::BookingEndBeforeStart => "วันที่สิ้นสุดต้องมากกว่าวันที่เริ่มต้น",
        MessageKey::BookingOverlap => "ช่วงเวลาดังกล่าวมีการจองแล้ว กรุณาเลือกวันที่อื่น",
        MessageKey::BookingNotFound => "ไม่พบข้อมูลการจอง",
        MessageKey::PeopleAtLeastOne => "จำนวนผู้เข้าพักต้องมากกว่า 0",
        MessageKey::PeopleTooMany => "จำนวนผู้เข้าพักมากเกินไป",
        MessageKey::InvalidStatus => "สถานะไม่ถูกต้อง",
        MessageKey::ActivityAdded => "เพิ่มกิจกรรมเรียบร้อย",
        MessageKey::ActivityDeleted => "ลบกิจกรรมเรียบร้อย",
        MessageKey::ActivityNotFound => "ไม่พบข้อมูลกิจกรรม",
        MessageKey::ImageAdded => "เพิ่มรูปภาพเรียบร้อย",
        MessageKey::ImageDeleted => "ลบรูปภาพเรียบร้อย",
        MessageKey::ImageNotFound => "ไม่พบรูปภาพ",
        MessageKey::InvalidCategory => "หมวดหมู่ไม่ถูกต้อง",
        MessageKey::InvalidDate => "รูปแบบวันที่ไม่ถูกต้อง",
        MessageKey::InvalidId => "รหัสอ้างอิงไม่ถูกต้อง",
        MessageKey::MalformedBody => "ข้อมูลที่ส่งมาไม่ถูกต้อง",
        MessageKey::FetchFailed => "เกิดข้อผิดพลาดในการดึงข้อมูล",
        MessageKey::SaveFailed => "เกิดข้อผิดพลาดในการบันทึกข้อมูล",
        MessageKey::UpdateFailed => "เกิดข้อผิดพลาดในการอัพเดทข้อมูล",
        MessageKey::DeleteFailed => "เกิดข้อผิดพลาดในการลบข้อมูล",
        MessageKey::DatabaseUnavailable => "ไม่สามารถเชื่อมต่อฐานข้อมูลได้ กรุณาลองใหม่อีกครั้ง",
        MessageKey::DatabaseReachable => "Database connection successful",
        MessageKey::DatabaseUnreachable => "Failed to connect to database",
    }
}

const fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::RegistrationIncomplete => "Please fill in all required fields",
        MessageKey::UsernameTooShort => "Username must be at least 3 characters",
        MessageKey::UsernameTooLong => "Username must be at most 20 characters",
        MessageKey::EmailInvalid => "Please enter a valid email address",
        MessageKey::PasswordTooShort => "Password must be at least 6 characters",
        MessageKey::AccountTaken => "This email or username is already in use",
        MessageKey::Registered => "Registration successful",
        MessageKey::LoginIncomplete => "Please enter your email or username and password",
        MessageKey::AccountNotFound => "No account matches these details",
        MessageKey::WrongPassword => "Incorrect password",
        MessageKey::AdminOnly => "You do not have access",
        MessageKey::Unauthorized => "Unauthorized",
        MessageKey::LoggedIn => "Signed in",
        MessageKey::LoggedOut => "Signed out",
        MessageKey::BookingSaved => "Booking saved",
        MessageKey::BookingStartInPast => "Start date must not be before today",
        MessageKey::BookingEndBeforeStart => "End date must be after the start date",
        MessageKey::BookingOverlap => {
            "These dates are already booked, please choose other dates"
        }
        MessageKey::BookingNotFound => "Booking not found",
        MessageKey::PeopleAtLeastOne => "Number of guests must be greater than 0",
        MessageKey::PeopleTooMany => "Number of guests is too large",
        MessageKey::InvalidStatus => "Invalid status",
        MessageKey::ActivityAdded => "Activity added",
        MessageKey::ActivityDeleted => "Activity deleted",
        MessageKey::ActivityNotFound => "Activity not found",
        MessageKey::ImageAdded => "Image added",
        MessageKey::ImageDeleted => "Image deleted",
        MessageKey::ImageNotFound => "Image not found",
        MessageKey::InvalidCategory => "Invalid category",
        MessageKey::InvalidDate => "Invalid date format",
        MessageKey::InvalidId => "Invalid identifier",
        MessageKey::MalformedBody => "Malformed request body",
        MessageKey::FetchFailed => "Failed to load data",
        MessageKey::SaveFailed => "Failed to save data",
        MessageKey::UpdateFailed => "Failed to update data",
        MessageKey::DeleteFailed => "Failed to delete data",
        MessageKey::DatabaseUnavailable => "The database is unavailable, please try again",
        MessageKey::DatabaseReachable => "Database connection successful",
        MessageKey::DatabaseUnreachable => "Failed to connect to database",
    }
}
