mod openrouter_script_client_test;
mod provider_factory_test;
