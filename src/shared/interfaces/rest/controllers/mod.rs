pub mod resource_lifecycle_rest_controller;
