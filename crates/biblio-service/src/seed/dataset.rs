//! Built-in sample datasets used by the destructive reseed operations.

use biblio_entity::country::Country;

/// Seed author: email, plaintext password (hashed at seed time), name, country.
pub const SEED_AUTHORS: &[(&str, &str, &str, Country)] = &[
    ("gabriel@seed.dev", "gabriel123", "Gabriel Garcia", Country::Colombia),
    ("jorge@seed.dev", "jorge1234", "Jorge Luis Borges", Country::Argentina),
    ("fyodor@seed.dev", "fyodor123", "Fyodor Dostoevsky", Country::Russia),
    ("virginia@seed.dev", "virginia1", "Virginia Woolf", Country::England),
    ("haruki@seed.dev", "haruki123", "Haruki Murakami", Country::Japan),
    ("chinua@seed.dev", "chinua123", "Chinua Achebe", Country::Nigeria),
    ("miguel@seed.dev", "miguel123", "Miguel de Cervantes", Country::Spain),
    ("franz@seed.dev", "franz1234", "Franz Kafka", Country::Czechoslovakia),
    ("ursula@seed.dev", "ursula123", "Ursula K. Le Guin", Country::UnitedStates),
];

/// Seed publisher: name, country.
pub const SEED_PUBLISHERS: &[(&str, Country)] = &[
    ("Sudamericana", Country::Argentina),
    ("Hogarth Press", Country::England),
    ("Planeta", Country::Spain),
    ("Shinchosha", Country::Japan),
    ("Heinemann", Country::England),
    ("Random House", Country::UnitedStates),
];

/// Seed book: title, page count.
pub const SEED_BOOKS: &[(&str, i32)] = &[
    ("One Hundred Years", 417),
    ("Ficciones", 174),
    ("Crime and Punishment", 671),
    ("To the Lighthouse", 209),
    ("Kafka on the Shore", 505),
    ("Things Fall Apart", 209),
    ("Don Quixote", 863),
    ("The Trial", 255),
    ("The Dispossessed", 387),
    ("Mrs Dalloway", 194),
    ("Norwegian Wood", 296),
    ("The Aleph", 157),
];

#[cfg(test)]
mod tests {
    use super::*;

    // The datasets must satisfy the same validation the public endpoints
    // enforce, or reseeding would plant rows a client could never create.

    #[test]
    fn test_seed_authors_are_valid() {
        for (email, password, name, _) in SEED_AUTHORS {
            assert!(email.contains('@'), "bad seed email: {email}");
            assert!(password.len() >= 8, "short seed password for {email}");
            let len = name.chars().count();
            assert!((3..=22).contains(&len), "bad seed name: {name}");
        }
    }

    #[test]
    fn test_seed_author_emails_unique() {
        let mut emails: Vec<_> = SEED_AUTHORS.iter().map(|(e, ..)| e.to_lowercase()).collect();
        emails.sort();
        emails.dedup();
        assert_eq!(emails.len(), SEED_AUTHORS.len());
    }

    #[test]
    fn test_seed_publishers_are_valid() {
        for (name, _) in SEED_PUBLISHERS {
            let len = name.chars().count();
            assert!((3..=20).contains(&len), "bad seed publisher: {name}");
        }
    }

    #[test]
    fn test_seed_books_are_valid() {
        for (title, pages) in SEED_BOOKS {
            let len = title.chars().count();
            assert!((3..=40).contains(&len), "bad seed title: {title}");
            assert!((1..=1500).contains(pages), "bad seed pages for {title}");
        }
    }
}
