//! Test: a tag list must name at least one tag.
//!
//! A list of only separators and whitespace declares nothing; drop the attribute.

use faces::Faces;

#[derive(Faces)]
pub struct Record {
    #[faces(" , ")]
    pub note: String,
}

fn main() {
    let record = Record {
        note: String::new(),
    };
    println!("{}", record.note);
}
