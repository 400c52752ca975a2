pub mod qa_api_service;
