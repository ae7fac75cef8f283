pub mod role_query_service_impl;
