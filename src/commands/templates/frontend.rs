//! Contents of the files overwritten in the Vite starter.

pub fn tailwind_config() -> &'static str {
    r#"export default {
  content: [
    "./index.html",
    "./src/**/*.{js,jsx}"
  ],
  theme: {
    extend: {},
  },
  plugins: [],
};
"#
}

pub fn index_css() -> &'static str {
    r#"@tailwind base;
@tailwind components;
@tailwind utilities;
"#
}

pub fn home_page() -> &'static str {
    r#"export default function Home() {
  return (
    <div className="min-h-screen flex items-center justify-center bg-gray-100">
      <h1 className="text-3xl font-bold text-blue-600">
        Frontend ready
      </h1>
    </div>
  );
}
"#
}

pub fn app_jsx() -> &'static str {
    r#"import { BrowserRouter, Routes, Route } from "react-router-dom";
import Home from "./pages/Home";

export default function App() {
  return (
    <BrowserRouter>
      <Routes>
        <Route path="/" element={<Home />} />
      </Routes>
    </BrowserRouter>
  );
}
"#
}
