// @file: src/tests/mod.rs
// @description: Client suites run against a local stub of the proxy.
// @author: LAS.

mod futures_routes;

use crate::QueryClient;
use mockito::ServerGuard;

pub(crate) const JSON: &str = "application/json";

pub(crate) fn client_for(server: &ServerGuard) -> QueryClient {
    QueryClient::new(&server.url()).expect("stub server url is valid")
}
