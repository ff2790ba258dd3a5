//! A fixed catalogue of worked counting problems. Each answer is derived from the engine at the
//! time it is requested, never stored.

use std::fmt;

use serde::Serialize;

use crate::comb::{combination, permutation, power};
use crate::count::Count;
use crate::domain::DomainError;
use crate::factorial::factorial;

/// One labelled figure in a [`Solution`]. Single-answer problems use an empty label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Part {
    pub label: &'static str,
    pub value: Count,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    pub parts: Vec<Part>,
}

impl Solution {
    fn single(value: Count) -> Self {
        Self {
            parts: vec![Part { label: "", value }],
        }
    }

    fn of(parts: impl IntoIterator<Item = (&'static str, Count)>) -> Self {
        Self {
            parts: parts
                .into_iter()
                .map(|(label, value)| Part { label, value })
                .collect(),
        }
    }

    pub fn values(&self) -> Vec<Count> {
        self.parts.iter().map(|part| part.value).collect()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, part) in self.parts.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            if part.label.is_empty() {
                write!(f, "{}", part.value)?;
            } else {
                write!(f, "{}: {}", part.label, part.value)?;
            }
        }
        Ok(())
    }
}

pub struct Problem {
    pub id: u8,
    pub question: &'static str,
    pub explanation: &'static str,
    solver: fn() -> Result<Solution, DomainError>,
}

impl Problem {
    pub fn solve(&self) -> Result<Solution, DomainError> {
        (self.solver)()
    }
}

impl fmt::Debug for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Problem").field("id", &self.id).finish_non_exhaustive()
    }
}

/// All problems, in ascending `id` order.
pub fn problems() -> &'static [Problem] {
    &PROBLEMS
}

pub fn find(id: u8) -> Option<&'static Problem> {
    PROBLEMS.iter().find(|problem| problem.id == id)
}

static PROBLEMS: [Problem; 14] = [
    Problem {
        id: 1,
        question: "In how many ways can 10 people sit on a bench that has 4 seats?",
        explanation: "Order matters and 4 of the 10 people are seated, so this is a permutation: \
            P(10,4) = 10! / (10-4)! = 10! / 6! = 5040.",
        solver: bench_seating,
    },
    Problem {
        id: 2,
        question: "Three prizes are to be awarded in a class of 21 students. In how many ways can \
            this be done if a) the prizes are different; b) the prizes are identical?",
        explanation: "a) Different prizes make the order matter: P(21,3) = 21! / 18! = 7980.\n\
            b) Identical prizes make it a combination: C(21,3) = 21! / (3! × 18!) = 1330.",
        solver: prizes,
    },
    Problem {
        id: 3,
        question: "The diagonals of a polygon join pairs of non-adjacent vertices. How many \
            diagonals do a square, a hexagon and a decagon have?",
        explanation: "Every pair of vertices is joined by a side or a diagonal, so a polygon with \
            n sides has C(n,2) - n = n(n-3)/2 diagonals.\n\
            Square: 4(4-3)/2 = 2\nHexagon: 6(6-3)/2 = 9\nDecagon: 10(10-3)/2 = 35",
        solver: diagonals,
    },
    Problem {
        id: 4,
        question: "8 men and 7 women stand in a row so that the women occupy the even-numbered \
            places. In how many ways can this be done?",
        explanation: "The 7 women fill the 7 even places (2, 4, …, 14) in 7! ways and the 8 men \
            fill the 8 odd places (1, 3, …, 15) in 8! ways.\n\
            Total: 7! × 8! = 5040 × 40320 = 203,212,800.",
        solver: alternating_row,
    },
    Problem {
        id: 5,
        question: "How many 4-digit numbers can be formed from the digits 1 to 9 if 1. digits may \
            repeat; 2. digits may not repeat; 3. the last digit must be 1 and digits may not \
            repeat?",
        explanation: "1. Each of the 4 places takes any of 9 digits: 9⁴ = 6561.\n\
            2. Ordered selection of 4 distinct digits: P(9,4) = 9! / 5! = 3024.\n\
            3. With the last digit fixed at 1, the first 3 places take distinct digits from the \
            remaining 8: P(8,3) = 8! / 5! = 336.",
        solver: four_digit_numbers,
    },
    Problem {
        id: 6,
        question: "How many different assignments of birthdays are possible in a group of 15 \
            friends?",
        explanation: "Each person's birthday is any of 365 days, and birthdays may coincide, so \
            there are 365 choices for each of the 15 people.\n\
            Total: 365¹⁵ ≈ 2.719 × 10³⁸.",
        solver: birthdays,
    },
    Problem {
        id: 7,
        question: "How many 5-symbol Morse letters consist of 3 dashes and 2 dots?",
        explanation: "A letter is determined by which 3 of the 5 positions hold dashes: \
            C(5,3) = 5! / (3! × 2!) = 10.",
        solver: morse_letters,
    },
    Problem {
        id: 8,
        question: "Four coins are tossed together. a) How many outcomes are possible? b) In how \
            many of them are there 2 heads and 2 tails?",
        explanation: "a) Each coin lands one of 2 ways: 2⁴ = 16.\n\
            b) Choose which 2 of the 4 coins show heads: C(4,2) = 4! / (2! × 2!) = 6.",
        solver: coins,
    },
    Problem {
        id: 9,
        question: "5 mathematics books, 7 project-management books and 3 interface-design books \
            are placed on a shelf. How many arrangements are there if a) the books of each \
            subject stay together; b) only the mathematics books stay together?",
        explanation: "a) The 3 subject blocks are ordered in 3! ways and the books inside them in \
            5!, 7! and 3! ways.\n\
            Total: 3! × 5! × 7! × 3! = 6 × 120 × 5040 × 6 = 21,772,800.\n\
            b) Treat the mathematics books as one unit, ordered internally in 5! ways, leaving \
            1 + 7 + 3 = 11 units to arrange in 11! ways.\n\
            Total: 5! × 11! = 120 × 39,916,800 = 4,790,016,000.",
        solver: bookshelf,
    },
    Problem {
        id: 10,
        question: "Four mathematics books are kept together as a unit, alongside 6 different \
            physics books and 2 different chemistry books. In how many ways can they be \
            arranged?",
        explanation: "There are 1 + 6 + 2 = 9 units, arranged in 9! ways, and the 4 mathematics \
            books are ordered inside their unit in 4! ways.\n\
            Total: 9! × 4! = 362,880 × 24 = 8,709,120.",
        solver: grouped_shelf,
    },
    Problem {
        id: 11,
        question: "A student must answer 7 of the 10 questions on an exam. In how many ways can \
            they choose? And if the first 4 questions are compulsory?",
        explanation: "a) Any 7 of 10: C(10,7) = 10! / (7! × 3!) = 120.\n\
            b) With the first 4 compulsory, 3 more come from the remaining 6: \
            C(6,3) = 6! / (3! × 3!) = 20.",
        solver: exam_questions,
    },
    Problem {
        id: 12,
        question: "A railway line has 25 stations. How many different tickets must be printed if \
            each ticket shows its departure and arrival stations?",
        explanation: "A ticket is an ordered pair of distinct stations: P(25,2) = 25 × 24 = 600.",
        solver: railway_tickets,
    },
    Problem {
        id: 13,
        question: "Three athletes take part in a race. In how many ways can they finish, if ties \
            are allowed?",
        explanation: "1. All three finish at different times: 3! = 6.\n\
            2. Two tie for first and one finishes second: C(3,2) = 3.\n\
            3. One finishes first and two tie for second: C(3,2) = 3.\n\
            4. All three tie: 1.\n\
            Total: 6 + 3 + 3 + 1 = 13. The answer of 10 sometimes quoted for this problem leaves \
            out case 3.",
        solver: race_finishes,
    },
    Problem {
        id: 14,
        question: "A hospital labels patient records with five symbols: two letters followed by \
            three digits. With an alphabet of 25 letters, how many labels are possible if 1. \
            there are no restrictions; 2. the two letters must differ?",
        explanation: "1. 25 choices for each letter and 10 for each digit: \
            25² × 10³ = 625 × 1000 = 625,000.\n\
            2. 25 choices for the first letter and 24 for the second: \
            25 × 24 × 10³ = 600 × 1000 = 600,000.",
        solver: record_labels,
    },
];

fn bench_seating() -> Result<Solution, DomainError> {
    Ok(Solution::single(permutation(10, 4)?))
}

fn prizes() -> Result<Solution, DomainError> {
    Ok(Solution::of([
        ("a) different prizes", permutation(21, 3)?),
        ("b) identical prizes", combination(21, 3)?),
    ]))
}

fn diagonals() -> Result<Solution, DomainError> {
    let diagonals = |sides: u32| -> Result<Count, DomainError> {
        Ok(combination(sides, 2)? - Count::from(sides as u128))
    };
    Ok(Solution::of([
        ("square", diagonals(4)?),
        ("hexagon", diagonals(6)?),
        ("decagon", diagonals(10)?),
    ]))
}

fn alternating_row() -> Result<Solution, DomainError> {
    Ok(Solution::single(factorial(7)? * factorial(8)?))
}

fn four_digit_numbers() -> Result<Solution, DomainError> {
    Ok(Solution::of([
        ("1. with repetition", power(9, 4)),
        ("2. without repetition", permutation(9, 4)?),
        ("3. ending in 1, without repetition", permutation(8, 3)?),
    ]))
}

fn birthdays() -> Result<Solution, DomainError> {
    Ok(Solution::single(power(365, 15)))
}

fn morse_letters() -> Result<Solution, DomainError> {
    Ok(Solution::single(combination(5, 3)?))
}

fn coins() -> Result<Solution, DomainError> {
    Ok(Solution::of([
        ("a) possible outcomes", power(2, 4)),
        ("b) 2 heads and 2 tails", combination(4, 2)?),
    ]))
}

fn bookshelf() -> Result<Solution, DomainError> {
    Ok(Solution::of([
        (
            "a) each subject together",
            factorial(3)? * factorial(5)? * factorial(7)? * factorial(3)?,
        ),
        ("b) only mathematics together", factorial(5)? * factorial(11)?),
    ]))
}

fn grouped_shelf() -> Result<Solution, DomainError> {
    Ok(Solution::single(factorial(9)? * factorial(4)?))
}

fn exam_questions() -> Result<Solution, DomainError> {
    Ok(Solution::of([
        ("a) any 7 of 10", combination(10, 7)?),
        ("b) first 4 compulsory", combination(6, 3)?),
    ]))
}

fn railway_tickets() -> Result<Solution, DomainError> {
    Ok(Solution::single(permutation(25, 2)?))
}

fn race_finishes() -> Result<Solution, DomainError> {
    let all_apart = permutation(3, 3)?;
    let tie_for_first = combination(3, 2)?;
    let tie_for_second = combination(3, 2)?;
    let all_tied = combination(3, 3)?;
    Ok(Solution::single(
        all_apart + tie_for_first + tie_for_second + all_tied,
    ))
}

fn record_labels() -> Result<Solution, DomainError> {
    let digits = power(10, 3);
    Ok(Solution::of([
        ("1. no restrictions", power(25, 2) * digits),
        ("2. distinct letters", permutation(25, 2)? * digits),
    ]))
}
