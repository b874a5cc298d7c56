// End-to-end tests for the Tracked Reads Backend API
//
// Each test spawns the real application wired to two local doubles: an
// in-process HTTP server standing in for the Raindrop API and an in-memory
// artifact store that records every publish. The app's reqwest client talks
// actual HTTP to the stub, so the whole pipeline from trigger to artifact is
// exercised without leaving the machine.
//
// The app is stateless, so tests need no shared fixtures and run in
// parallel on their own server instances.
