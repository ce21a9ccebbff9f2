//! Parsing of `--item` arguments.

use std::str::FromStr;

/// An item name with an optional quantity, written `Name=quantity` or `Name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    pub name: String,
    /// Empty when no quantity was given.
    pub quantity: String,
}

impl FromStr for ItemSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, quantity) = s.split_once('=').unwrap_or((s, ""));
        if name.trim().is_empty() {
            return Err(format!("missing item name in '{}'", s));
        }
        Ok(Self {
            name: name.trim().to_string(),
            quantity: quantity.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> ItemSpec {
        s.parse().unwrap()
    }

    #[test]
    fn test_name_and_quantity() {
        assert_eq!(
            parse("Chicken=200g"),
            ItemSpec {
                name: "Chicken".to_string(),
                quantity: "200g".to_string(),
            }
        );
    }

    #[test]
    fn test_name_only() {
        let spec = parse("Eggs");
        assert_eq!(spec.name, "Eggs");
        assert_eq!(spec.quantity, "");
    }

    #[test]
    fn test_quantity_may_contain_equals_and_spaces() {
        let spec = parse(" Milk = 1 cup = 240ml ");
        assert_eq!(spec.name, "Milk");
        assert_eq!(spec.quantity, "1 cup = 240ml");
    }

    #[test]
    fn test_empty_name_is_rejected() {
        assert!("=200g".parse::<ItemSpec>().is_err());
        assert!("  = 1 cup".parse::<ItemSpec>().is_err());
        assert!("".parse::<ItemSpec>().is_err());
    }
}
