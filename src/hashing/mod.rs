//! Hash-based set and frequency utilities.
//!
//! Every routine builds its `HashSet`/`HashMap` on entry and drops it on
//! return; nothing is cached between calls.

pub mod anagram;
pub mod consecutive;
pub mod duplicates;
pub mod product;
pub mod top_k;
pub mod two_sum;

pub use anagram::{canonical_form, group_anagrams, is_anagram, is_anagram_by_count};
pub use consecutive::longest_consecutive_run;
pub use duplicates::{has_duplicate, has_duplicate_by_count};
pub use product::{checked_product_except_self, product_except_self};
pub use top_k::{frequency_map, top_k};
pub use two_sum::{two_sum, two_sum_sorted};
