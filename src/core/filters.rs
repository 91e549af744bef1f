use crate::models::Profile;
use std::collections::HashSet;

/// Mutual gender-preference gate
///
/// Both profiles must seek the other's gender; there is no partial credit.
/// The check is symmetric by construction even though the rest of the
/// scoring pipeline is not.
#[inline]
pub fn mutual_gender_match(a: &Profile, b: &Profile) -> bool {
    a.interested_in == b.gender && b.interested_in == a.gender
}

/// Unordered set intersection of two string lists
///
/// Duplicates collapse; the output order is unspecified.
pub fn common_elements(first: &[String], second: &[String]) -> Vec<String> {
    let first_set: HashSet<&str> = first.iter().map(String::as_str).collect();
    let second_set: HashSet<&str> = second.iter().map(String::as_str).collect();

    first_set
        .intersection(&second_set)
        .map(|item| item.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_profile(gender: &str, interested_in: &str) -> Profile {
        Profile {
            id: "test_user".to_string(),
            name: "Test User".to_string(),
            age: 28,
            gender: gender.to_string(),
            interested_in: interested_in.to_string(),
            location: "New York".to_string(),
            hobbies: vec![],
            interests: vec![],
            occupation: "Engineer".to_string(),
            education_level: "Masters".to_string(),
            personality_traits: vec![],
        }
    }

    #[test]
    fn test_mutual_match() {
        let a = create_test_profile("male", "female");
        let b = create_test_profile("female", "male");

        assert!(mutual_gender_match(&a, &b));
        assert!(mutual_gender_match(&b, &a));
    }

    #[test]
    fn test_one_sided_interest_fails() {
        let a = create_test_profile("male", "female");
        let b = create_test_profile("female", "female");

        assert!(!mutual_gender_match(&a, &b));
        assert!(!mutual_gender_match(&b, &a));
    }

    #[test]
    fn test_common_elements() {
        let first = vec!["hiking".to_string(), "reading".to_string(), "hiking".to_string()];
        let second = vec!["hiking".to_string(), "cooking".to_string()];

        let common = common_elements(&first, &second);
        assert_eq!(common, vec!["hiking".to_string()]);
    }

    #[test]
    fn test_common_elements_disjoint() {
        let first = vec!["hiking".to_string()];
        let second = vec!["cooking".to_string()];

        assert!(common_elements(&first, &second).is_empty());
        assert!(common_elements(&first, &[]).is_empty());
    }
}
