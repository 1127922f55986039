//! Test: unknown field options are rejected.
//!
//! Field attributes accept tag list strings and `opaque` only.

use faces::Faces;

#[derive(Faces)]
pub struct Record {
    #[faces(shallow)]
    pub note: String,
}

fn main() {
    let record = Record {
        note: String::new(),
    };
    println!("{}", record.note);
}
