pub mod scheme_cache;
