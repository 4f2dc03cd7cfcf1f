//! # Input Validation
//!
//! Checks that run before anything is sent to the store. Order submission fails on the
//! first missing selection ([`ValidationError`]); the staff forms report every bad field
//! at once ([`FormErrors`]) and, when clean, produce the typed create payload.

use crate::model::{
    ClassCreate, ClassForm, MenuItemCreate, MenuItemForm, RoomCode, StudentCreate, StudentForm,
    StudentId,
};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("static pattern"));
static LETTERS_AND_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("static pattern"));
static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("static pattern"));
static ALLERGEN_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+(,[A-Za-z]+)*$").expect("static pattern"));

/// Missing selections when submitting an order, in the order they are checked.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Please select a class")]
    ClassNotSelected,
    #[error("Please select a payment method")]
    PaymentNotSelected,
    #[error("Please add items to your order")]
    EmptyCart,
    #[error("Please select a student")]
    StudentNotSelected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Every invalid field of a submitted form.
#[derive(Debug, Clone, Default, PartialEq, Error)]
#[error("{}", join_fields(.fields))]
pub struct FormErrors {
    fields: Vec<FieldError>,
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: &'static str) {
        self.fields.push(FieldError { field, message });
    }

    /// The message for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.fields
    }

    fn into_result<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Validate the menu form and convert it into a create payload.
///
/// Allergens may be empty; otherwise they must be letter-only words separated by
/// commas. Whitespace anywhere in the list is ignored.
pub fn parse_menu_item(form: &MenuItemForm) -> Result<MenuItemCreate, FormErrors> {
    let mut errors = FormErrors::new();

    let name = form.name.trim();
    if name.is_empty() || !LETTERS_AND_SPACES.is_match(name) {
        errors.add("name", "Name must contain letters only");
    }

    let price = form
        .price
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p > 0.0);
    if price.is_none() {
        errors.add("price", "Price must be a positive number");
    }

    let allergens: String = form.allergens.chars().filter(|c| !c.is_whitespace()).collect();
    if !allergens.is_empty() && !ALLERGEN_LIST.is_match(&allergens) {
        errors.add("allergens", "Allergens must be comma-separated words");
    }

    let prep_time = form.prep_time.trim().parse::<u32>().ok().filter(|t| *t > 0);
    if prep_time.is_none() {
        errors.add("prep_time", "Preparation time must be a positive number");
    }

    let (Some(price), Some(prep_time)) = (price, prep_time) else {
        return Err(errors);
    };
    errors.into_result(MenuItemCreate {
        name: name.to_string(),
        price,
        description: form.description.trim().to_string(),
        allergens: split_allergens(&allergens),
        prep_time,
        image: form
            .image
            .as_ref()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
    })
}

fn split_allergens(list: &str) -> Vec<String> {
    list.split(',')
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validate the class form and build its room code.
pub fn parse_class(form: &ClassForm) -> Result<ClassCreate, FormErrors> {
    let mut errors = FormErrors::new();

    let name = form.name.trim();
    if name.is_empty() {
        errors.add("name", "Class name is required");
    }
    if !LETTERS.is_match(&form.building) {
        errors.add("building", "Building name must contain letters only");
    }
    let floor = DIGITS
        .is_match(&form.floor)
        .then(|| form.floor.parse::<u32>().ok())
        .flatten();
    if floor.is_none() {
        errors.add("floor", "Floor must be a number");
    }
    let room = DIGITS
        .is_match(&form.room_number)
        .then(|| form.room_number.parse::<u32>().ok())
        .flatten()
        .filter(|r| *r > 0);
    if room.is_none() {
        errors.add("room_number", "Room number must be a positive number");
    }

    let (Some(floor), Some(room)) = (floor, room) else {
        return Err(errors);
    };
    errors.into_result(ClassCreate {
        name: name.to_string(),
        room: RoomCode {
            building: form.building.clone(),
            floor,
            room,
        },
    })
}

pub fn parse_student(form: &StudentForm) -> Result<StudentCreate, FormErrors> {
    let mut errors = FormErrors::new();

    let student_id = form.student_id.trim();
    if student_id.is_empty() {
        errors.add("student_id", "Student ID is required");
    }
    let full_name = form.full_name.trim();
    if full_name.is_empty() {
        errors.add("full_name", "Full name is required");
    }

    errors.into_result(StudentCreate {
        student_id: StudentId::new(student_id),
        full_name: full_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu_form() -> MenuItemForm {
        MenuItemForm {
            name: "Veggie Pizza".to_string(),
            price: "12.5".to_string(),
            description: "Tomato and basil".to_string(),
            allergens: "Gluten, Dairy".to_string(),
            prep_time: "15".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_valid_menu_item() {
        let item = parse_menu_item(&menu_form()).unwrap();
        assert_eq!(item.name, "Veggie Pizza");
        assert_eq!(item.price, 12.5);
        assert_eq!(item.allergens, vec!["Gluten", "Dairy"]);
        assert_eq!(item.prep_time, 15);
    }

    #[test]
    fn test_empty_allergens_allowed() {
        let form = MenuItemForm {
            allergens: "  ".to_string(),
            ..menu_form()
        };
        assert!(parse_menu_item(&form).unwrap().allergens.is_empty());
    }

    #[test]
    fn test_menu_item_reports_every_bad_field() {
        let form = MenuItemForm {
            name: "Pizza 2".to_string(),
            price: "0".to_string(),
            allergens: "Gluten,,Dairy".to_string(),
            prep_time: "-5".to_string(),
            ..menu_form()
        };
        let errors = parse_menu_item(&form).unwrap_err();
        assert_eq!(errors.get("name"), Some("Name must contain letters only"));
        assert_eq!(errors.get("price"), Some("Price must be a positive number"));
        assert_eq!(
            errors.get("allergens"),
            Some("Allergens must be comma-separated words")
        );
        assert_eq!(
            errors.get("prep_time"),
            Some("Preparation time must be a positive number")
        );
        assert_eq!(errors.fields().len(), 4);
    }

    #[test]
    fn test_non_numeric_price_rejected() {
        let form = MenuItemForm {
            price: "free".to_string(),
            ..menu_form()
        };
        let errors = parse_menu_item(&form).unwrap_err();
        assert_eq!(errors.fields().len(), 1);
        assert!(errors.get("price").is_some());
    }

    #[test]
    fn test_valid_class() {
        let form = ClassForm {
            name: "Math 101".to_string(),
            building: "A".to_string(),
            floor: "0".to_string(),
            room_number: "12".to_string(),
        };
        let class = parse_class(&form).unwrap();
        assert_eq!(class.name, "Math 101");
        assert_eq!(class.room.to_string(), "A-0-12");
    }

    #[test]
    fn test_class_field_rules() {
        let form = ClassForm {
            name: "  ".to_string(),
            building: "A1".to_string(),
            floor: "one".to_string(),
            room_number: "0".to_string(),
        };
        let errors = parse_class(&form).unwrap_err();
        assert_eq!(errors.get("name"), Some("Class name is required"));
        assert_eq!(
            errors.get("building"),
            Some("Building name must contain letters only")
        );
        assert_eq!(errors.get("floor"), Some("Floor must be a number"));
        assert_eq!(
            errors.get("room_number"),
            Some("Room number must be a positive number")
        );
    }

    #[test]
    fn test_student_fields_required() {
        let errors = parse_student(&StudentForm::default()).unwrap_err();
        assert!(errors.get("student_id").is_some());
        assert!(errors.get("full_name").is_some());

        let student = parse_student(&StudentForm {
            student_id: " S010 ".to_string(),
            full_name: "Tamar Levi".to_string(),
        })
        .unwrap();
        assert_eq!(student.student_id, StudentId::new("S010"));
    }

    #[test]
    fn test_form_errors_display() {
        let mut errors = FormErrors::new();
        errors.add("name", "Class name is required");
        errors.add("floor", "Floor must be a number");
        assert_eq!(
            errors.to_string(),
            "name: Class name is required; floor: Floor must be a number"
        );
    }
}
