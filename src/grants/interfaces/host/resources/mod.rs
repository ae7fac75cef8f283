pub mod grant_resource_data;
pub mod keyspace_grant_resource_data;
pub mod table_grant_resource_data;
