//! General string helpers shared across crates.

use crate::String;

/// Spreadsheet-style short name for the n-th binding: `a`..`z`, `aa`, `ab`, ...
pub fn binding_name(mut index: usize) -> String {
    let mut reversed = smallvec::SmallVec::<[u8; 4]>::new();
    loop {
        reversed.push(b'a' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }

    reversed.iter().rev().map(|&b| b as char).collect()
}
