use normalform::{Error, KeyPolicy, Normalizer, Relation};

fn band() -> Relation {
    Relation::new(
        "Band",
        vec!["Name", "Genre", "Members", "Albums"],
        vec!["Name"],
        vec!["Members", "Albums"],
        vec![
            vec![
                "Dream Theater",
                "Progressive Metal",
                "{John Petrucci, John Myung, Jordan Rudess}",
                "{Images and Words, Awake}",
            ],
            vec![
                "Nothing But Thieves",
                "Alternative Rock",
                "{Conor Mason, Joe Langridge-Brown}",
                "{Broken Machine}",
            ],
        ],
    )
}

fn main() -> Result<(), Error> {
    for policy in [KeyPolicy::Cumulative, KeyPolicy::PerAttribute] {
        println!("{:?}", policy);
        let relations = Normalizer::new()
            .with_key_policy(policy)
            .normalize_1nf(band())?;

        for relation in relations.iter() {
            println!(
                "{}({}) key: ({})",
                relation.name(),
                relation.attributes().join(", "),
                relation.primary_key().join(", ")
            );
        }
        println!();
    }

    Ok(())
}
