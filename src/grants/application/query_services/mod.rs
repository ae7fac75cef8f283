pub mod grant_query_service_impl;
