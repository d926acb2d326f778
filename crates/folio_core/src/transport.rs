//! Delivery of contact messages
//!
//! A [`Transport`] delivers one message synchronously. The
//! [`ContactDispatcher`] owns a transport on a worker thread so the caller
//! never blocks on delivery, and hands outcomes back over a channel.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::contact::ContactFields;

/// Default delay of the simulated transport
pub const SIMULATED_DELAY: Duration = Duration::from_millis(2000);

/// Error delivering a message
#[derive(Debug)]
pub enum TransportError {
    /// IO error writing the message
    Io(io::Error),
    /// Serialization error
    Serialize(ron::Error),
    /// The delivery worker is gone
    Disconnected,
}

impl From<io::Error> for TransportError {
    fn from(e: io::Error) -> Self {
        TransportError::Io(e)
    }
}

impl From<ron::Error> for TransportError {
    fn from(e: ron::Error) -> Self {
        TransportError::Serialize(e)
    }
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportError::Io(e) => write!(f, "IO error: {}", e),
            TransportError::Serialize(e) => write!(f, "Serialize error: {}", e),
            TransportError::Disconnected => write!(f, "Delivery worker disconnected"),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::Io(e) => Some(e),
            TransportError::Serialize(e) => Some(e),
            TransportError::Disconnected => None,
        }
    }
}

/// Something that can deliver a contact message
pub trait Transport: Send {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Deliver one message, blocking until done
    fn deliver(&mut self, message: &ContactFields) -> Result<(), TransportError>;
}

/// Waits a fixed delay and reports success; nothing leaves the process
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(SIMULATED_DELAY)
    }
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Transport for SimulatedTransport {
    fn name(&self) -> &str {
        "simulated"
    }

    fn deliver(&mut self, message: &ContactFields) -> Result<(), TransportError> {
        thread::sleep(self.delay);
        log::debug!("Simulated delivery of message from {}", message.email);
        Ok(())
    }
}

/// Writes every message as a RON file into a directory
#[derive(Debug, Clone)]
pub struct OutboxTransport {
    dir: PathBuf,
    sequence: u32,
}

impl OutboxTransport {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            sequence: 0,
        }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn next_path(&mut self) -> PathBuf {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        self.sequence += 1;
        self.dir
            .join(format!("message-{}-{:04}.ron", millis, self.sequence))
    }
}

impl Transport for OutboxTransport {
    fn name(&self) -> &str {
        "outbox"
    }

    fn deliver(&mut self, message: &ContactFields) -> Result<(), TransportError> {
        fs::create_dir_all(&self.dir)?;
        let pretty = ron::ser::PrettyConfig::new().struct_names(true);
        let contents = ron::ser::to_string_pretty(message, pretty)?;
        let path = self.next_path();
        fs::write(&path, contents)?;
        log::info!("Wrote contact message to {}", path.display());
        Ok(())
    }
}

/// Runs a transport on a dedicated worker thread
///
/// The worker exits when the dispatcher is dropped.
pub struct ContactDispatcher {
    sender: Sender<ContactFields>,
    receiver: Receiver<Result<(), TransportError>>,
    transport_name: String,
}

impl ContactDispatcher {
    pub fn new<T: Transport + 'static>(mut transport: T) -> Self {
        let (message_tx, message_rx) = channel::<ContactFields>();
        let (result_tx, result_rx) = channel::<Result<(), TransportError>>();
        let transport_name = transport.name().to_string();

        thread::spawn(move || {
            while let Ok(message) = message_rx.recv() {
                let result = transport.deliver(&message);
                if result_tx.send(result).is_err() {
                    break;
                }
            }
        });

        Self {
            sender: message_tx,
            receiver: result_rx,
            transport_name,
        }
    }

    pub fn transport_name(&self) -> &str {
        &self.transport_name
    }

    /// Queue a message for delivery
    pub fn dispatch(&self, message: ContactFields) -> Result<(), TransportError> {
        self.sender
            .send(message)
            .map_err(|_| TransportError::Disconnected)
    }

    /// Next delivery outcome, if one is ready
    pub fn poll(&self) -> Option<Result<(), TransportError>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(TransportError::Disconnected)),
        }
    }

    /// Wait up to `timeout` for the next delivery outcome
    pub fn wait(&self, timeout: Duration) -> Option<Result<(), TransportError>> {
        match self.receiver.recv_timeout(timeout) {
            Ok(result) => Some(result),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => Some(Err(TransportError::Disconnected)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn message() -> ContactFields {
        ContactFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hi".to_string(),
            ..ContactFields::default()
        }
    }

    struct FailingTransport;

    impl Transport for FailingTransport {
        fn name(&self) -> &str {
            "failing"
        }

        fn deliver(&mut self, _message: &ContactFields) -> Result<(), TransportError> {
            Err(io::Error::new(io::ErrorKind::Other, "smtp down").into())
        }
    }

    #[test]
    fn test_simulated_default_delay() {
        assert_eq!(SimulatedTransport::default().delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_simulated_always_succeeds() {
        let mut transport = SimulatedTransport::new(Duration::ZERO);
        assert!(transport.deliver(&message()).is_ok());
    }

    #[test]
    fn test_outbox_writes_ron_files() {
        let dir = TempDir::new().unwrap();
        let mut transport = OutboxTransport::new(dir.path().join("outbox"));
        transport.deliver(&message()).unwrap();
        transport.deliver(&message()).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path().join("outbox")).unwrap().collect();
        assert_eq!(entries.len(), 2);

        let path = entries[0].as_ref().unwrap().path();
        let stored: ContactFields = ron::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(stored, message());
    }

    #[test]
    fn test_dispatcher_reports_outcome() {
        let dispatcher = ContactDispatcher::new(SimulatedTransport::new(Duration::from_millis(10)));
        assert!(dispatcher.poll().is_none());
        dispatcher.dispatch(message()).unwrap();

        let outcome = dispatcher.wait(Duration::from_secs(5)).expect("delivery finished");
        assert!(outcome.is_ok());
        assert_eq!(dispatcher.transport_name(), "simulated");
    }

    #[test]
    fn test_dispatcher_forwards_failure() {
        let dispatcher = ContactDispatcher::new(FailingTransport);
        dispatcher.dispatch(message()).unwrap();

        let outcome = dispatcher.wait(Duration::from_secs(5)).expect("delivery finished");
        assert!(matches!(outcome, Err(TransportError::Io(_))));
    }
}
