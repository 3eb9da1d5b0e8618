//! Background estimation workers
//!
//! Runs estimates on a small thread pool behind an id-tagged
//! request/response channel. Responses arrive in completion order;
//! callers match them back by id.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use serde::{Deserialize, Serialize};

use bhada_domain::model::{FareBreakdown, TripParams};

use crate::app::estimate_service::EstimateService;

/// One estimation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub id: String,
    pub params: TripParams,
}

impl EstimateRequest {
    /// Request with a fresh random id
    pub fn new(params: TripParams) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            params,
        }
    }

    pub fn with_id(id: impl Into<String>, params: TripParams) -> Self {
        Self {
            id: id.into(),
            params,
        }
    }
}

/// Response echoing the request id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateResponse {
    pub id: String,
    pub result: Result<FareBreakdown, String>,
}

/// Pool of estimation worker threads
pub struct EstimateWorkerPool {
    request_tx: Option<Sender<EstimateRequest>>,
    response_rx: Receiver<EstimateResponse>,
    handles: Vec<JoinHandle<()>>,
}

impl EstimateWorkerPool {
    /// Spawn `workers` threads sharing one request queue
    pub fn spawn(service: EstimateService, workers: usize) -> Self {
        let workers = workers.max(1);
        let (request_tx, request_rx) = mpsc::channel::<EstimateRequest>();
        let (response_tx, response_rx) = mpsc::channel();
        let request_rx = Arc::new(Mutex::new(request_rx));
        let service = Arc::new(service);

        let handles = (0..workers)
            .map(|_| {
                let request_rx = Arc::clone(&request_rx);
                let response_tx = response_tx.clone();
                let service = Arc::clone(&service);
                thread::spawn(move || loop {
                    let request = match request_rx.lock() {
                        Ok(rx) => rx.recv(),
                        Err(_) => break,
                    };
                    let Ok(request) = request else { break };
                    let response = EstimateResponse {
                        id: request.id.clone(),
                        result: process(&service, &request),
                    };
                    if response_tx.send(response).is_err() {
                        break;
                    }
                })
            })
            .collect();

        Self {
            request_tx: Some(request_tx),
            response_rx,
            handles,
        }
    }

    /// Queue a request; false once the pool is shut down
    pub fn submit(&self, request: EstimateRequest) -> bool {
        match &self.request_tx {
            Some(tx) => tx.send(request).is_ok(),
            None => false,
        }
    }

    /// Block for the next response; `None` once all workers are gone
    pub fn recv(&self) -> Option<EstimateResponse> {
        self.response_rx.recv().ok()
    }

    /// Close the request queue and join the workers
    pub fn shutdown(mut self) {
        self.request_tx.take();
        for handle in self.handles.drain(..) {
            let _ = handle.join();
        }
    }
}

/// Price a request, surfacing an unresolvable vehicle as an error
/// string instead of a silent zero breakdown
fn process(service: &EstimateService, request: &EstimateRequest) -> Result<FareBreakdown, String> {
    if service.rates().vehicle(&request.params.vehicle_id).is_none() {
        return Err(format!(
            "unknown vehicle class: {}",
            request.params.vehicle_id
        ));
    }
    Ok(service.estimate(&request.params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{PERMIT_FEES, RATE_CARD};
    use bhada_domain::model::TripMode;
    use std::collections::HashMap;

    fn service() -> EstimateService {
        EstimateService::new(RATE_CARD.clone(), PERMIT_FEES.clone())
    }

    #[test]
    fn test_responses_match_ids() {
        let pool = EstimateWorkerPool::spawn(service(), 2);

        let trips = [
            ("a", TripParams::new("sedan", 1000.0, 1150.0, TripMode::Drop)),
            ("b", TripParams::new("suv", 0.0, 500.0, TripMode::OutstationRound)),
        ];
        for (id, params) in trips {
            assert!(pool.submit(EstimateRequest::with_id(id, params)));
        }

        let mut results = HashMap::new();
        for _ in 0..2 {
            let response = pool.recv().unwrap();
            results.insert(response.id.clone(), response);
        }
        pool.shutdown();

        let sedan = results["a"].result.as_ref().unwrap();
        assert!((sedan.distance_charge - 2400.0).abs() < f64::EPSILON);
        let suv = results["b"].result.as_ref().unwrap();
        assert!((suv.distance_charge - 9000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_vehicle_is_error_string() {
        let pool = EstimateWorkerPool::spawn(service(), 1);
        let params = TripParams::new("rickshaw", 0.0, 50.0, TripMode::Drop);
        assert!(pool.submit(EstimateRequest::with_id("x", params)));
        let response = pool.recv().unwrap();
        pool.shutdown();

        assert_eq!(response.id, "x");
        assert!(response.result.is_err());
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let a = EstimateRequest::new(TripParams::new("sedan", 0.0, 10.0, TripMode::Drop));
        let b = EstimateRequest::new(TripParams::new("sedan", 0.0, 10.0, TripMode::Drop));
        assert_ne!(a.id, b.id);
    }
}
