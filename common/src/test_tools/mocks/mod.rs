pub mod autoscaling_client;
pub mod elb_client;
pub mod elbv2_client;

use rusoto_mock::{MockRequestDispatcher, MultipleMockRequestDispatcher};

use crate::test_tools::responses::error_response;

/// Dispatcher answering every request with `200 OK` and the given body.
pub fn ok_dispatcher(body: &str) -> MockRequestDispatcher {
    MockRequestDispatcher::with_status(200).with_body(body)
}

/// Dispatcher answering every request with a query-protocol error document.
pub fn error_dispatcher(status: u16, code: &str, message: &str) -> MockRequestDispatcher {
    MockRequestDispatcher::with_status(status).with_body(&error_response(code, message))
}

/// Answers each request with the next dispatcher of `responses`, in order.
pub fn sequence_dispatcher(
    responses: Vec<MockRequestDispatcher>,
) -> MultipleMockRequestDispatcher<std::vec::IntoIter<MockRequestDispatcher>> {
    MultipleMockRequestDispatcher::new(responses)
}
