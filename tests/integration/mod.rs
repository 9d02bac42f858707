//! Integration tests exercising relver against real git repositories

mod helpers;
mod test_resolver;
mod test_tags;
