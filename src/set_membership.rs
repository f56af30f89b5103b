/// Insert-and-query interface of a set membership structure.
pub trait SetMembership<T: ?Sized> {
    type InsertError;

    fn contains(&self, item: &T) -> bool;
    fn insert(&mut self, item: &T) -> Result<(), Self::InsertError>;
}
