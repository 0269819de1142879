//! Set listing: newest-first ordering and CSV export.

use std::cmp::Reverse;

use crate::cards::CardSet;

/// Sort sets by release date, newest first. Sets without a date go last.
///
/// Catalog dates are `YYYY/MM/DD`, so string order is date order.
pub fn sort_newest_first(sets: &mut [CardSet]) {
    sets.sort_by_key(|s| (s.release_date.is_none(), Reverse(s.release_date.clone())));
}

/// Render sets as `setid,setname` CSV.
///
/// Names containing a comma are wrapped in double quotes.
#[must_use]
pub fn sets_to_csv(sets: &[CardSet]) -> String {
    let mut csv = String::from("setid,setname\n");
    for set in sets {
        csv.push_str(&set.id);
        csv.push(',');
        if set.name.contains(',') {
            csv.push('"');
            csv.push_str(&set.name.replace('"', "\"\""));
            csv.push('"');
        } else {
            csv.push_str(&set.name);
        }
        csv.push('\n');
    }
    csv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(id: &str, name: &str, date: Option<&str>) -> CardSet {
        CardSet {
            id: id.to_string(),
            name: name.to_string(),
            release_date: date.map(str::to_string),
            ..CardSet::default()
        }
    }

    #[test]
    fn test_newest_first() {
        let mut sets = vec![
            set("base1", "Base", Some("1999/01/09")),
            set("mystery", "Mystery", None),
            set("sv1", "Scarlet & Violet", Some("2023/03/31")),
            set("swsh1", "Sword & Shield", Some("2020/02/07")),
        ];

        sort_newest_first(&mut sets);

        let ids: Vec<_> = sets.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["sv1", "swsh1", "base1", "mystery"]);
    }

    #[test]
    fn test_csv_quotes_commas() {
        let sets = vec![
            set("base1", "Base", None),
            set("pop1", "POP Series 1, Part \"A\"", None),
        ];

        assert_eq!(
            sets_to_csv(&sets),
            "setid,setname\nbase1,Base\npop1,\"POP Series 1, Part \"\"A\"\"\"\n"
        );
    }

    #[test]
    fn test_csv_empty() {
        assert_eq!(sets_to_csv(&[]), "setid,setname\n");
    }
}
