use std::time::Instant;

use trispell::{AsciiStringStrategy, SpellChecker};

fn main() {
    let mut checker: SpellChecker<AsciiStringStrategy> = SpellChecker::new();

    measure("load_dictionary", || {
        checker
            .load_dictionary("data/words.txt")
            .expect("bundled word list");
    });
    println!(
        "{} word(s) in {} node(s)",
        checker.word_count(),
        checker.node_count()
    );

    measure("correct (exact)", || {
        println!("{:?}", checker.correct("book"));
    });

    measure("correct (wrong vowel)", || {
        println!("{:?}", checker.correct("cit"));
    });

    measure("correct (doubled letter)", || {
        println!("{:?}", checker.correct("boook"));
    });

    measure("correct (no match)", || {
        println!("{:?}", checker.correct("zzz"));
    });
}

fn measure<F>(name: &str, mut f: F)
where
    F: FnMut(),
{
    let now = Instant::now();
    f();
    println!("{} took {} us", name, now.elapsed().as_micros());
}
