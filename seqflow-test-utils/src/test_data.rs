// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fixture records shared by the operator tests.
//!
//! People carry a numeric id so that keyed operators (`to_map`, `distinct_by`,
//! the set operators) have a natural key distinct from value equality.

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Person {
    pub id: u32,
    pub name: String,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Animal {
    pub name: String,
    pub legs: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TestData {
    Person(Person),
    Animal(Animal),
}

impl TestData {
    /// Name of the person or animal, used as a projection key in tests.
    pub fn name(&self) -> &str {
        match self {
            TestData::Person(p) => &p.name,
            TestData::Animal(a) => &a.name,
        }
    }

    /// Person id; animals have none.
    pub fn id(&self) -> Option<u32> {
        match self {
            TestData::Person(p) => Some(p.id),
            TestData::Animal(_) => None,
        }
    }

    pub fn is_person(&self) -> bool {
        matches!(self, TestData::Person(_))
    }
}

impl Display for TestData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestData::Person(p) => write!(f, "#{} {} ({})", p.id, p.name, p.age),
            TestData::Animal(a) => write!(f, "{} ({} legs)", a.name, a.legs),
        }
    }
}

pub fn person(id: u32, name: &str, age: u32) -> TestData {
    TestData::Person(Person {
        id,
        name: name.to_owned(),
        age,
    })
}

pub fn animal(name: &str, legs: u32) -> TestData {
    TestData::Animal(Animal {
        name: name.to_owned(),
        legs,
    })
}

pub fn person_alice() -> TestData {
    person(1, "Alice", 25)
}

pub fn person_bob() -> TestData {
    person(2, "Bob", 30)
}

pub fn person_charlie() -> TestData {
    person(3, "Charlie", 35)
}

pub fn person_diane() -> TestData {
    person(4, "Diane", 40)
}

pub fn person_dave() -> TestData {
    person(5, "Dave", 28)
}

pub fn animal_dog() -> TestData {
    animal("Dog", 4)
}

pub fn animal_spider() -> TestData {
    animal("Spider", 8)
}

pub fn animal_bird() -> TestData {
    animal("Bird", 2)
}

pub fn animal_cat() -> TestData {
    animal("Cat", 4)
}

/// Alice, Bob, Charlie and Diane, ordered by id and by age.
pub fn people() -> Vec<TestData> {
    vec![person_alice(), person_bob(), person_charlie(), person_diane()]
}
