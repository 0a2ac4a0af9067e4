pub mod find_customer;
pub mod register_customer;
pub mod update_customer;
pub mod verify_customer;

#[cfg(test)]
pub(crate) mod test_support;
