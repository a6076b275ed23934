use crate::storage::StudentRecord;

pub fn display_record(record: &StudentRecord) {
    println!("Roll No : {}", record.id());
    println!("Name    : {}", record.name());
    println!("Email   : {}", record.email());
    println!("Course  : {}", record.course());
    println!("Marks   : {}", record.score());
    println!("Grade   : {}", record.grade());
    println!("-----------------------------------");
}

pub fn display_records(title: &str, records: &[StudentRecord]) {
    println!("===== {} =====", title);
    for record in records {
        display_record(record);
    }
}
