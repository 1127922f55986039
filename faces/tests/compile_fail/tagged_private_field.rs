//! Test: tagging a private field is rejected.
//!
//! Private fields are never touched by the engine, so the tag would be ignored.

use faces::Faces;

#[derive(Faces)]
pub struct Record {
    #[faces("private")]
    secret: String,
}

fn main() {
    let record = Record {
        secret: String::new(),
    };
    println!("{}", record.secret);
}
