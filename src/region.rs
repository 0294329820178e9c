use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// A household registration area and the two-digit code its letter stands for
/// in the checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RegionEntry {
    pub letter: char,
    pub numeric_code: &'static str,
    pub name: &'static str,
}

impl RegionEntry {
    const fn new(letter: char, numeric_code: &'static str, name: &'static str) -> Self {
        Self {
            letter,
            numeric_code,
            name,
        }
    }

    /// The two digits of the numeric code, most significant first.
    pub fn code_digits(&self) -> [u32; 2] {
        let mut digits = self.numeric_code.chars().filter_map(|c| c.to_digit(10));
        [digits.next().unwrap_or(0), digits.next().unwrap_or(0)]
    }
}

impl Display for RegionEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.letter, self.name)
    }
}

// L, R, S and Y are not issued as region letters.
const REGIONS: [RegionEntry; 22] = [
    RegionEntry::new('A', "10", "台北市"),
    RegionEntry::new('F', "15", "新北市"),
    RegionEntry::new('H', "17", "桃園市"),
    RegionEntry::new('J', "18", "新竹縣"),
    RegionEntry::new('O', "35", "新竹市"),
    RegionEntry::new('K', "19", "苗栗縣"),
    RegionEntry::new('B', "11", "台中市"),
    RegionEntry::new('N', "22", "彰化縣"),
    RegionEntry::new('M', "21", "南投縣"),
    RegionEntry::new('P', "23", "雲林縣"),
    RegionEntry::new('I', "34", "嘉義市"),
    RegionEntry::new('Q', "24", "嘉義縣"),
    RegionEntry::new('D', "13", "台南市"),
    RegionEntry::new('E', "14", "高雄市"),
    RegionEntry::new('T', "27", "屏東縣"),
    RegionEntry::new('G', "16", "宜蘭縣"),
    RegionEntry::new('U', "28", "花蓮縣"),
    RegionEntry::new('V', "29", "台東縣"),
    RegionEntry::new('C', "12", "基隆市"),
    RegionEntry::new('X', "30", "澎湖縣"),
    RegionEntry::new('W', "32", "金門縣"),
    RegionEntry::new('Z', "33", "連江縣"),
];

lazy_static! {
    static ref STANDARD_REGIONS: RegionTable = RegionTable::from_entries(&REGIONS);
}

/// Lookup table from region letter to [RegionEntry]. Entries keep the order
/// they were given in, which is the order they are offered to users.
#[derive(Debug)]
pub struct RegionTable {
    entries: Vec<RegionEntry>,
    by_letter: HashMap<char, usize>,
}

impl RegionTable {
    /// The table of every region letter currently issued.
    pub fn standard() -> &'static RegionTable {
        &STANDARD_REGIONS
    }

    fn from_entries(entries: &[RegionEntry]) -> Self {
        let by_letter = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.letter, index))
            .collect();
        Self {
            entries: entries.to_vec(),
            by_letter,
        }
    }

    /// Case-sensitive: only uppercase letters are keys.
    pub fn lookup(&self, letter: char) -> Option<&RegionEntry> {
        self.by_letter
            .get(&letter)
            .map(|index| &self.entries[*index])
    }

    pub fn name(&self, letter: char) -> Option<&'static str> {
        self.lookup(letter).map(|entry| entry.name)
    }

    pub fn entries(&self) -> impl Iterator<Item = &RegionEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Name of the region a letter stands for, if it is an issued region letter.
pub fn region_name(letter: char) -> Option<&'static str> {
    RegionTable::standard().name(letter)
}
