// End-to-end tests for the Speakify application core.
//
// The external collaborators are played by in-process axum stubs bound to
// OS-assigned ports: one for the speech-synthesis endpoint, one for the
// identity authority's token endpoint. The real reqwest-backed clients talk
// to them over localhost, so the full request path (headers, bodies, error
// classification) is exercised exactly as in production.

mod test_session;
