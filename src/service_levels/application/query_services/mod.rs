pub mod service_level_query_service_impl;
