use lazy_static::lazy_static;
use regex::Regex;

// Ordered pattern tables for the field extractors. Order is load-bearing:
// every extractor walks its table top to bottom and the first pattern that
// yields an acceptable match wins, so the most specific labels come first.
// Tables are compiled once at first use and only ever read afterwards.

lazy_static! {
    /// Labeled name patterns, most explicit document labels first.
    pub static ref NAME_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)name[:\s]+([A-Za-z][A-Za-z .'\-]+)").unwrap(),
        Regex::new(r"(?i)nama[:\s]+([A-Za-z][A-Za-z .'\-]+)").unwrap(),
        Regex::new(r"(?i)full\s+name[:\s]+([A-Za-z][A-Za-z .'\-]+)").unwrap(),
        Regex::new(r"(?i)father['\s]*s?\s+name[:\s]+([A-Za-z][A-Za-z .'\-]+)").unwrap(),
        Regex::new(r"(?i)mother['\s]*s?\s+name[:\s]+([A-Za-z][A-Za-z .'\-]+)").unwrap(),
        Regex::new(r"(?i)spouse['\s]*s?\s+name[:\s]+([A-Za-z][A-Za-z .'\-]+)").unwrap(),
        Regex::new(r"(?i)husband['\s]*s?\s+name[:\s]+([A-Za-z][A-Za-z .'\-]+)").unwrap(),
        Regex::new(r"(?i)wife['\s]*s?\s+name[:\s]+([A-Za-z][A-Za-z .'\-]+)").unwrap(),
        Regex::new(r"(?i)candidate['\s]*s?\s+name[:\s]+([A-Za-z][A-Za-z .'\-]+)").unwrap(),
        Regex::new(r"(?i)applicant['\s]*s?\s+name[:\s]+([A-Za-z][A-Za-z .'\-]+)").unwrap(),
        Regex::new(r"(?i)surname[:\s]+([A-Za-z][A-Za-z .'\-]+)").unwrap(),
        Regex::new(r"(?i)given\s+name[:\s]+([A-Za-z][A-Za-z .'\-]+)").unwrap(),
        Regex::new(r"(?i)first\s+name[:\s]+([A-Za-z][A-Za-z .'\-]+)").unwrap(),
        Regex::new(r"(?i)last\s+name[:\s]+([A-Za-z][A-Za-z .'\-]+)").unwrap(),
        Regex::new(r"(?i)holder\s+name[:\s]+([A-Za-z][A-Za-z .'\-]+)").unwrap(),
        Regex::new(r"(?i)cardholder\s+name[:\s]+([A-Za-z][A-Za-z .'\-]+)").unwrap(),
        Regex::new(r"(?i)holder[:\s]+([A-Za-z][A-Za-z .'\-]+)").unwrap(),
    ];

    /// Fallback when no label matched: consecutive capitalized words on one
    /// line. Deliberately case sensitive, so it runs on the original-case text.
    pub static ref CAPITALIZED_NAME_PATTERN: Regex =
        Regex::new(r"\b([A-Z][a-z]+(?:[ \t]+[A-Z][a-z.\-]*)+)\b").unwrap();

    /// Date-of-birth patterns, "date of birth" label first, bare numeric date
    /// shapes last. Candidates still have to pass calendar validation.
    pub static ref DOB_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)date of birth[:\s]+(\d{2}[-/]\d{2}[-/]\d{4})").unwrap(),
        Regex::new(r"(?i)dob[:\s]+(\d{2}[-/]\d{2}[-/]\d{4})").unwrap(),
        Regex::new(r"(?i)birth[:\s]+date[:\s]+(\d{2}[-/]\d{2}[-/]\d{4})").unwrap(),
        Regex::new(r"(?i)date[:\s]+of[:\s]+birth[:\s]+(\d{2}[-/]\d{2}[-/]\d{4})").unwrap(),
        Regex::new(r"(?i)birth[:\s]+(\d{2}[-/]\d{2}[-/]\d{4})").unwrap(),
        // Bare date shapes, word-bounded so they never match inside a longer
        // digit run (a DD-MM-YY window inside a DD-MM-YYYY date, say).
        Regex::new(r"\b(\d{2}[-/]\d{2}[-/]\d{4})\b").unwrap(),
        Regex::new(r"\b(\d{1,2}[-/]\d{1,2}[-/]\d{4})\b").unwrap(),
        Regex::new(r"\b(\d{2}-\d{2}-\d{2})\b").unwrap(),
        Regex::new(r"\b(\d{4}[-/]\d{2}[-/]\d{2})\b").unwrap(),
    ];

    /// Labeled address patterns capturing up to end of line.
    pub static ref ADDRESS_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)address[:\s]+([A-Za-z0-9 \t,.#/\-]+)").unwrap(),
        Regex::new(r"(?i)permanent address[:\s]+([A-Za-z0-9 \t,.#/\-]+)").unwrap(),
        Regex::new(r"(?i)current address[:\s]+([A-Za-z0-9 \t,.#/\-]+)").unwrap(),
        Regex::new(r"(?i)residential address[:\s]+([A-Za-z0-9 \t,.#/\-]+)").unwrap(),
        Regex::new(r"(?i)addr[:\s]+([A-Za-z0-9 \t,.#/\-]+)").unwrap(),
        Regex::new(r"(?i)location[:\s]+([A-Za-z0-9 \t,.#/\-]+)").unwrap(),
        Regex::new(r"(?i)place[:\s]+([A-Za-z0-9 \t,.#/\-]+)").unwrap(),
    ];

    /// Postal-code-adjacent heuristic: a 6-digit PIN next to a text span.
    pub static ref POSTAL_ADDRESS_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(\d{6})[ \t\n]+([A-Za-z][A-Za-z ,.\-]+)").unwrap(),
        Regex::new(r"([A-Za-z][A-Za-z ,.\-]+)[ \t\n]+(\d{6})").unwrap(),
    ];

    /// Last-resort address scan: any substantial alphanumeric block.
    pub static ref ADDRESS_BLOCK_PATTERN: Regex =
        Regex::new(r"([A-Za-z0-9 \t,.#\-\n]{20,})").unwrap();

    /// Aadhaar: 12 digits, optionally grouped by spaces or dashes.
    pub static ref AADHAAR_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(\d{4}[ \-]?\d{4}[ \-]?\d{4})").unwrap(),
        Regex::new(r"(\d{12})").unwrap(),
    ];

    /// PAN: 5 letters + 4 digits + 1 letter.
    pub static ref PAN_PATTERN: Regex =
        Regex::new(r"(?i)([A-Z]{5}[0-9]{4}[A-Z])").unwrap();

    /// Voter ID: 3 letters + 7 digits, optionally with a literal prefix.
    pub static ref VOTER_ID_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)([A-Z]{3}[0-9]{7})").unwrap(),
        Regex::new(r"(?i)(voter-[A-Z]{3}[0-9]{7})").unwrap(),
    ];

    /// Parent/guardian name labels, a strict subset of the name labels.
    pub static ref PARENT_NAME_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)father['\s]*s?\s+name[:\s]+([A-Za-z][A-Za-z .']+)").unwrap(),
        Regex::new(r"(?i)mother['\s]*s?\s+name[:\s]+([A-Za-z][A-Za-z .']+)").unwrap(),
        Regex::new(r"(?i)guardian['\s]*s?\s+name[:\s]+([A-Za-z][A-Za-z .']+)").unwrap(),
        Regex::new(r"(?i)parent['\s]*s?\s+name[:\s]+([A-Za-z][A-Za-z .']+)").unwrap(),
        Regex::new(r"(?i)husband['\s]*s?\s+name[:\s]+([A-Za-z][A-Za-z .']+)").unwrap(),
        Regex::new(r"(?i)wife['\s]*s?\s+name[:\s]+([A-Za-z][A-Za-z .']+)").unwrap(),
    ];

    /// Value-shape checks used by the confidence scorer.
    pub static ref DATE_SHAPE: Regex = Regex::new(r"^\d{2}[-/]\d{2}[-/]\d{4}").unwrap();
    pub static ref AADHAAR_SHAPE: Regex = Regex::new(r"^\d{4} \d{4} \d{4}").unwrap();
    pub static ref PAN_SHAPE: Regex = Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]").unwrap();
}

/// Gender keyword sets, evaluated male, then female, then other. Matching is
/// substring plus an explicit non-alphabetic boundary check on both sides, so
/// the one-letter tokens never fire inside a word.
pub const MALE_WORDS: &[&str] = &[
    "male",
    "m",
    "gentleman",
    "man",
    "boy",
    "husband",
    "son",
    "he",
    "masculine",
    "males",
];

pub const FEMALE_WORDS: &[&str] = &[
    "female",
    "f",
    "women",
    "girl",
    "wife",
    "daughter",
    "she",
    "females",
    "woman",
    "fem",
];

pub const OTHER_GENDER_WORDS: &[&str] = &["other", "transgender", "trans"];

/// Keywords that make a generic DATE hint count as a birth date.
pub const BIRTH_KEYWORDS: &[&str] = &["birth", "dob", "date of birth"];

/// A PAN-shaped match is only believed when one of these appears anywhere in
/// the text, lowercased.
pub const PAN_KEYWORDS: &[&str] = &["pan", "permanent account number", "pan card", "income tax"];

/// Weaker PAN indicators, accepted only inside a window around the candidate.
pub const PAN_CONTEXT_KEYWORDS: &[&str] =
    &["PAN", "CARD", "NUMBER", "INCOME", "TAX", "GOVT", "GOVERNMENT"];

/// Half-width in bytes of the context window around a PAN candidate.
pub const PAN_CONTEXT_WINDOW: usize = 50;

/// Known Indian cities and states, lowercased, used by the address paragraph
/// scan. Not exhaustive; a miss only means falling through to the generic
/// block scan.
pub const PLACE_NAMES: &[&str] = &[
    // Major cities
    "mumbai",
    "delhi",
    "bangalore",
    "bengaluru",
    "kolkata",
    "chennai",
    "hyderabad",
    "pune",
    "ahmedabad",
    "jaipur",
    "lucknow",
    "patna",
    "bhopal",
    "chandigarh",
    "nagpur",
    "indore",
    "thane",
    "bhubaneswar",
    "vadodara",
    "nashik",
    "agra",
    "kanpur",
    "noida",
    "gurgaon",
    "faridabad",
    "meerut",
    "varanasi",
    "allahabad",
    "amritsar",
    "srinagar",
    "jodhpur",
    "raipur",
    "visakhapatnam",
    "coimbatore",
    "mysore",
    "ludhiana",
    "aurangabad",
    "gwalior",
    "jalandhar",
    "madurai",
    "kalyan",
    "bareilly",
    "jammu",
    "dhanbad",
    "rohtak",
    "kollam",
    "thiruvananthapuram",
    "kochi",
    "kozhikode",
    "tiruchirappalli",
    "salem",
    "warangal",
    "guntur",
    "vijayawada",
    "nellore",
    "kota",
    "durgapur",
    "siliguri",
    "rourkela",
    "mathura",
    "amravati",
    "nanded",
    "karnal",
    "bhagalpur",
    "tirupati",
    "saharanpur",
    "bhavnagar",
    "ahmednagar",
    "cuddalore",
    "chittoor",
    // States and union territories
    "maharashtra",
    "tamil nadu",
    "karnataka",
    "kerala",
    "telangana",
    "andhra pradesh",
    "uttar pradesh",
    "madhya pradesh",
    "rajasthan",
    "west bengal",
    "bihar",
    "gujarat",
    "jharkhand",
    "odisha",
    "assam",
    "haryana",
    "punjab",
    "himachal pradesh",
    "uttarakhand",
    "chhattisgarh",
    "jammu and kashmir",
    "ladakh",
    "goa",
    "puducherry",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_pattern_stops_at_end_of_line() {
        let caps = NAME_PATTERNS[0].captures("Name: Ramesh Kumar\nDOB: 12-03-1994").unwrap();
        assert_eq!(caps.get(1).unwrap().as_str().trim(), "Ramesh Kumar");
    }

    #[test]
    fn test_dob_label_pattern_ranks_first() {
        let text = "issued 01-01-2020 date of birth: 12-03-1994";
        let caps = DOB_PATTERNS[0].captures(text).unwrap();
        assert_eq!(caps.get(1).unwrap().as_str(), "12-03-1994");
    }

    #[test]
    fn test_pan_pattern_is_case_insensitive() {
        assert!(PAN_PATTERN.is_match("abcde1234f"));
        assert!(PAN_PATTERN.is_match("ABCDE1234F"));
        assert!(!PAN_PATTERN.is_match("ABCD1234F"));
    }

    #[test]
    fn test_shape_patterns_are_anchored() {
        assert!(DATE_SHAPE.is_match("12-03-1994"));
        assert!(!DATE_SHAPE.is_match("born 12-03-1994"));
        assert!(AADHAAR_SHAPE.is_match("1234 5678 9123"));
        assert!(!AADHAAR_SHAPE.is_match("123456789123"));
        assert!(PAN_SHAPE.is_match("ABCDE1234F"));
        assert!(!PAN_SHAPE.is_match("abcde1234f"));
    }
}
