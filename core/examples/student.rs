use normalform::{normalize_1nf, Error, Relation};

fn main() -> Result<(), Error> {
    let student = Relation::new(
        "Student",
        vec!["ID", "Name", "Courses", "Phones"],
        vec!["ID"],
        vec!["Courses", "Phones"],
        vec![
            vec!["1", "Arya Stark", "{CS101, CS102}", "{555-0101}"],
            vec!["2", "Jon Snow", "{MA201}", "{555-0102, 555-0103}"],
            vec!["3", "Sansa Stark", "{CS101, MA201, PH110}", "{}"],
        ],
    );
    student.validate()?;
    println!("{}", student);

    println!("NORMALIZE 1NF");
    for relation in normalize_1nf(student)? {
        println!("{}", relation);
    }

    Ok(())
}
