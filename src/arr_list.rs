mod inner;
mod list;
mod shift;

pub use list::ArrList;
