/// A message that can be sent through the [`Mediator`](super::Mediator).
///
/// Each request type has exactly one handler and its own response type.
/// `NAME` identifies the request in logs and in `Mediator::requests`.
pub trait Request: Send + Sync + 'static {
    type Response: Send + 'static;

    const NAME: &'static str;
}
