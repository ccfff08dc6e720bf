//! Token counting: a consumer blocks until it has seen one empty signal per
//! resource.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tour_channel::{rendezvous, RecvChan};
use tour_runtime::{spawn, Task};

use crate::{DemoError, Transcript};

/// Zero-payload signal: only its arrival matters.
pub type Token = ();

/// The consumer's side of a database startup: the token stream plus what it
/// needs to observe the producer's final count.
#[derive(Debug)]
pub struct DbStartup {
    pub tokens: RecvChan<Token>,
    online: Arc<AtomicUsize>,
    producer: Task<Result<(), DemoError>>,
}

impl DbStartup {
    /// Databases the producer has counted so far. Only final after
    /// [`DbStartup::finish`].
    pub fn online(&self) -> usize {
        self.online.load(Ordering::SeqCst)
    }

    /// Wait for the producer to run to completion and return its count.
    pub fn finish(self) -> Result<usize, DemoError> {
        self.producer.join()??;
        Ok(self.online.load(Ordering::SeqCst))
    }
}

/// Start a producer that sends one token per database, printing
/// `Database <i> is online` after each send and counting it.
pub fn get_dbs_channel(num_dbs: usize, transcript: &Transcript) -> Result<DbStartup, DemoError> {
    let (tx, rx) = rendezvous::<Token>();
    let online = Arc::new(AtomicUsize::new(0));

    let count = Arc::clone(&online);
    let out = transcript.clone();
    let producer = spawn(move || -> Result<(), DemoError> {
        for i in 0..num_dbs {
            tx.send(())
                .map_err(|_| DemoError::ReceiverGone { stream: "database token" })?;
            out.line(format!("Database {} is online", i + 1));
            count.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    })?;

    Ok(DbStartup {
        tokens: rx,
        online,
        producer,
    })
}

/// Consume exactly `num_dbs` tokens.
///
/// Blocks while the producer is alive but silent. If the producer finishes
/// having sent fewer tokens, its channel closes and this reports
/// [`DemoError::StreamClosed`].
pub fn wait_for_dbs(num_dbs: usize, tokens: &RecvChan<Token>) -> Result<(), DemoError> {
    for received in 0..num_dbs {
        tokens.recv().map_err(|_| DemoError::StreamClosed {
            stream: "database token",
            received,
            expected: num_dbs,
        })?;
    }
    Ok(())
}

/// Wait for every database, then report how many came online.
pub fn boot_databases(num_dbs: usize, transcript: &Transcript) -> Result<usize, DemoError> {
    let startup = get_dbs_channel(num_dbs, transcript)?;
    wait_for_dbs(num_dbs, &startup.tokens)?;
    startup.finish()
}
