//! Pre-insert collision check for customer records.
//!
//! Two records collide when their company names reduce to token sets where one contains
//! the other, or when their normalized phones are equal. The guard is a boolean gate:
//! the first record that matches wins, with all name matches considered before any phone
//! match.

use std::collections::BTreeSet;

use crate::models::customer::CustomerModel;

/// Generic corporate words removed before names are compared.
pub const COMPANY_STOP_WORDS: &[&str] = &[
    "شركة",
    "مؤسسة",
    "المحدودة",
    "محدودة",
    "للتجارة",
    "والمقاولات",
    "مصنع",
    "company",
    "co",
    "corp",
    "est",
    "establishment",
    "limited",
    "ltd",
    "llc",
    "for",
    "trading",
    "and",
    "contracting",
    "factory",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateReason {
    Name,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuplicateMatch<'a> {
    pub customer: &'a CustomerModel,
    pub reason: DuplicateReason,
}

// Arabic harakat, superscript alef and tatweel
fn is_arabic_mark(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{065F}' | '\u{0670}' | '\u{0640}')
}

/// Lowercased word tokens of a company name without stop-words.
pub fn company_tokens(name: &str) -> BTreeSet<String> {
    let cleaned: String = name.chars().filter(|c| !is_arabic_mark(*c)).collect();
    cleaned
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .filter(|token| !COMPANY_STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// True when one token set contains the other.
///
/// Two empty sets (both names made only of stop-words) match each other. An empty set
/// against a non-empty one does not, otherwise a stop-word name would collide with every
/// record.
pub fn names_overlap(a: &BTreeSet<String>, b: &BTreeSet<String>) -> bool {
    if a.is_empty() != b.is_empty() {
        return false;
    }
    a.is_subset(b) || b.is_subset(a)
}

/// Scans `existing` (in store order) for a record colliding with the proposal.
pub fn find_duplicate<'a>(
    existing: &'a [CustomerModel],
    normalized_phone: &str,
    company_name: &str,
) -> Option<DuplicateMatch<'a>> {
    let proposed = company_tokens(company_name);

    let by_name = existing
        .iter()
        .find(|customer| names_overlap(&proposed, &company_tokens(&customer.company_name)));
    if let Some(customer) = by_name {
        return Some(DuplicateMatch {
            customer,
            reason: DuplicateReason::Name,
        });
    }

    existing
        .iter()
        .find(|customer| customer.phone.as_str() == normalized_phone)
        .map(|customer| DuplicateMatch {
            customer,
            reason: DuplicateReason::Phone,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::customer::PipelineStage;
    use chrono::Utc;
    use heapless::String as HeaplessString;

    fn customer(id: i64, name: &str, phone: &str, owner: &str) -> CustomerModel {
        CustomerModel {
            id,
            company_name: HeaplessString::try_from(name).unwrap(),
            sector: None,
            contact_name: None,
            job_title: None,
            phone: HeaplessString::try_from(phone).unwrap(),
            email: None,
            event_name: None,
            owner: HeaplessString::try_from(owner).unwrap(),
            status: PipelineStage::New,
            non_standard_status: None,
            quoted_amount: None,
            quoted_on: None,
            contract_amount: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_tokens_strip_stop_words() {
        let tokens = company_tokens("Al-Noor Trading Co.");
        assert_eq!(
            tokens,
            ["al", "noor"].iter().map(|s| s.to_string()).collect()
        );
        assert_eq!(company_tokens("شركة النور للتجارة"), company_tokens("النور"));
    }

    #[test]
    fn test_tokens_ignore_arabic_diacritics() {
        assert_eq!(company_tokens("مَصْنَع الأَمَل"), company_tokens("مصنع الأمل"));
    }

    #[test]
    fn test_subset_either_direction_collides() {
        let existing = vec![customer(1, "Al-Noor Trading", "+966500000001", "Khalid")];
        let hit = find_duplicate(&existing, "+966599999999", "Al-Noor Trading Co. Riyadh").unwrap();
        assert_eq!(hit.customer.id, 1);
        assert_eq!(hit.reason, DuplicateReason::Name);

        let existing = vec![customer(1, "Al-Noor Riyadh", "+966500000001", "Khalid")];
        let hit = find_duplicate(&existing, "+966599999999", "Noor").unwrap();
        assert_eq!(hit.reason, DuplicateReason::Name);
    }

    #[test]
    fn test_partial_overlap_is_not_a_duplicate() {
        let existing = vec![customer(1, "Al-Noor Riyadh", "+966500000001", "Khalid")];
        assert!(find_duplicate(&existing, "+966599999999", "Al-Noor Jeddah").is_none());
    }

    #[test]
    fn test_phone_match_ignores_name() {
        let existing = vec![customer(3, "Golden Palm Hotel", "+966501234567", "Huda")];
        let hit = find_duplicate(&existing, "+966501234567", "Desert Rose Catering").unwrap();
        assert_eq!(hit.customer.owner.as_str(), "Huda");
        assert_eq!(hit.reason, DuplicateReason::Phone);
    }

    #[test]
    fn test_name_matches_win_over_earlier_phone_match() {
        let existing = vec![
            customer(1, "Desert Rose", "+966501234567", "Huda"),
            customer(2, "Golden Palm", "+966500000002", "Khalid"),
        ];
        let hit = find_duplicate(&existing, "+966501234567", "Golden Palm Est").unwrap();
        assert_eq!(hit.customer.id, 2);
        assert_eq!(hit.reason, DuplicateReason::Name);
    }

    #[test]
    fn test_first_structural_match_wins() {
        let existing = vec![
            customer(1, "Noor Trading", "+966500000001", "Khalid"),
            customer(2, "Noor", "+966500000002", "Huda"),
        ];
        let hit = find_duplicate(&existing, "+966599999999", "Noor").unwrap();
        assert_eq!(hit.customer.id, 1);
    }

    #[test]
    fn test_stop_word_only_name_never_collides_by_name() {
        let existing = vec![customer(1, "Al-Noor", "+966500000001", "Khalid")];
        assert!(find_duplicate(&existing, "+966599999999", "Trading Company Ltd").is_none());
    }

    #[test]
    fn test_identical_stop_word_names_collide() {
        let existing = vec![customer(1, "Trading Company", "+966500000001", "Huda")];
        let hit = find_duplicate(&existing, "+966599999999", "Trading Co.").unwrap();
        assert_eq!(hit.customer.id, 1);
        assert_eq!(hit.reason, DuplicateReason::Name);
    }

    #[test]
    fn test_empty_store_has_no_duplicates() {
        assert!(find_duplicate(&[], "+966501234567", "Anything").is_none());
    }
}
