//! Type parameters, trait bounds and closed numeric constraints.

use std::fmt::Display;

/// Splits at the midpoint, whatever the element type.
pub fn split_any_slice<T>(items: &[T]) -> (&[T], &[T]) {
    items.split_at(items.len() / 2)
}

/// The last element, or the type's default when empty.
pub fn last_or_default<T: Default + Clone>(items: &[T]) -> T {
    items.last().cloned().unwrap_or_default()
}

/// Renders each error, preserving order.
pub fn error_messages<T: Display>(errors: &[T]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
}

/// The 64-bit numbers: `i64` and `f64`, nothing else.
///
/// Sealed, so no other crate can widen the set.
pub trait Number: sealed::Sealed + Copy + PartialOrd + Display {
    /// `None` when the quotient is undefined for the type.
    fn try_divide(self, divisor: Self) -> Option<Self>;
}

impl Number for i64 {
    fn try_divide(self, divisor: Self) -> Option<Self> {
        self.checked_div(divisor)
    }
}

impl Number for f64 {
    fn try_divide(self, divisor: Self) -> Option<Self> {
        Some(self / divisor)
    }
}

/// Integer division by zero yields `None`; float division follows IEEE 754.
pub fn divide_numbers<T: Number>(x: T, y: T) -> Option<T> {
    x.try_divide(y)
}

pub trait Product {
    fn price(&self) -> f64;
    fn name(&self) -> String;
}

/// A store that sells one kind of product.
pub trait Store<P: Product> {
    fn sell(&mut self, product: P);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub price: f64,
}

impl Product for Book {
    fn price(&self) -> f64 {
        self.price
    }

    fn name(&self) -> String {
        format!("{} by {}", self.title, self.author)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toy {
    pub name: String,
    pub price: f64,
}

impl Product for Toy {
    fn price(&self) -> f64 {
        self.price
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookStore {
    pub books_sold: Vec<Book>,
}

impl Store<Book> for BookStore {
    fn sell(&mut self, book: Book) {
        self.books_sold.push(book);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToyStore {
    pub toys_sold: Vec<Toy>,
}

impl Store<Toy> for ToyStore {
    fn sell(&mut self, toy: Toy) {
        self.toys_sold.push(toy);
    }
}

/// Sells each product in order and returns the takings.
pub fn sell_products<P, S>(store: &mut S, products: impl IntoIterator<Item = P>) -> f64
where
    P: Product,
    S: Store<P>,
{
    let mut takings = 0.0;
    for product in products {
        takings += product.price();
        store.sell(product);
    }
    takings
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_any_slice() {
        assert_eq!(split_any_slice(&[1, 2, 3, 4, 5]), (&[1, 2][..], &[3, 4, 5][..]));
        let words = ["a", "b"];
        assert_eq!(split_any_slice(&words), (&["a"][..], &["b"][..]));
        assert_eq!(split_any_slice::<u8>(&[]), (&[][..], &[][..]));
    }

    #[test]
    fn test_last_or_default() {
        assert_eq!(last_or_default(&[1, 2, 3]), 3);
        assert_eq!(last_or_default::<i32>(&[]), 0);
        assert_eq!(last_or_default::<String>(&[]), "");
    }

    #[test]
    fn test_error_messages() {
        let errors = [
            crate::BillingError::InsufficientFunds {
                cost: 2.0,
                balance: 1.0,
            },
            crate::BillingError::InsufficientFunds {
                cost: 3.0,
                balance: 0.0,
            },
        ];
        assert_eq!(
            error_messages(&errors),
            vec![
                "insufficient funds: cost 2.00 exceeds balance 1.00",
                "insufficient funds: cost 3.00 exceeds balance 0.00",
            ]
        );
    }

    #[test]
    fn test_divide_numbers() {
        assert_eq!(divide_numbers(30_i64, 60), Some(0));
        assert_eq!(divide_numbers(60_i64, 30), Some(2));
        assert_eq!(divide_numbers(1_i64, 0), None);
        assert_eq!(divide_numbers(3.0_f64, 4.0), Some(0.75));
        assert_eq!(divide_numbers(1.0_f64, 0.0), Some(f64::INFINITY));
    }

    #[test]
    fn test_sell_products() {
        let mut books = BookStore::default();
        let takings = sell_products(
            &mut books,
            vec![
                Book {
                    title: "The Hobbit".to_string(),
                    author: "J.R.R. Tolkien".to_string(),
                    price: 10.0,
                },
                Book {
                    title: "The Lord of the Rings".to_string(),
                    author: "J.R.R. Tolkien".to_string(),
                    price: 20.0,
                },
            ],
        );
        assert_eq!(takings, 30.0);
        assert_eq!(books.books_sold.len(), 2);
        assert_eq!(books.books_sold[0].name(), "The Hobbit by J.R.R. Tolkien");

        let mut toys = ToyStore::default();
        let lego = Toy {
            name: "Lego".to_string(),
            price: 10.0,
        };
        sell_products(&mut toys, [lego.clone()]);
        assert_eq!(toys.toys_sold, vec![lego]);
    }
}
