use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};

use crate::api::metrics::{increment_error_count, increment_request_count};

/// Conta requisições e erros (4xx/5xx) para o endpoint /metrics.
pub struct RequestMetrics;

impl<S, B> Transform<S, ServiceRequest> for RequestMetrics
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestMetricsMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestMetricsMiddleware { service }))
    }
}

pub struct RequestMetricsMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestMetricsMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Scrapes do próprio /metrics não entram na conta
        let counted = req.path() != "/metrics";
        if counted {
            increment_request_count();
        }

        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await;

            let failed = match &res {
                Ok(response) => {
                    let status = response.status();
                    status.is_client_error() || status.is_server_error()
                }
                Err(_) => true,
            };
            if counted && failed {
                increment_error_count();
            }

            res
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    #[actix_web::test]
    async fn test_counts_failed_requests() {
        let app = test::init_service(
            App::new()
                .wrap(RequestMetrics)
                .route("/ok", web::get().to(|| async { HttpResponse::Ok().finish() }))
                .route("/bad", web::get().to(|| async { HttpResponse::BadRequest().finish() })),
        )
        .await;

        let before = crate::api::metrics::get_metrics().await;
        let before = String::from_utf8(
            actix_web::body::to_bytes(before.into_body()).await.unwrap().to_vec(),
        )
        .unwrap();

        test::call_service(&app, test::TestRequest::get().uri("/ok").to_request()).await;
        test::call_service(&app, test::TestRequest::get().uri("/bad").to_request()).await;

        let after = crate::api::metrics::get_metrics().await;
        let after = String::from_utf8(
            actix_web::body::to_bytes(after.into_body()).await.unwrap().to_vec(),
        )
        .unwrap();

        assert!(counter(&after, "http_requests_total") >= counter(&before, "http_requests_total") + 2);
        assert!(counter(&after, "http_errors_total") >= counter(&before, "http_errors_total") + 1);
    }

    fn counter(text: &str, name: &str) -> u64 {
        text.lines()
            .find_map(|line| line.strip_prefix(name)?.trim().parse().ok())
            .unwrap_or(0)
    }
}
